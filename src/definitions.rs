//! The HRESULT catalog.
//!
//! # Taxonomy
//!
//! Entries are grouped by facility, blocks in facility order and codes
//! ascending within each block. Names and descriptions are transcribed from
//! the Windows error reference verbatim, including unexpanded `%1`
//! placeholders.
//!
//! | Block | Prefixes |
//! |-------|----------|
//! | `FACILITY_NULL` (0) | `E_`, `CO_E_`, `RO_E_` |
//! | `FACILITY_RPC` (1) | `RPC_E_`, `RPC_S_`, `CO_E_` |
//! | `FACILITY_DISPATCH` (2) | `DISP_E_`, `TYPE_E_` |
//! | `FACILITY_STORAGE` (3) | `STG_E_`, `STG_S_` |
//! | `FACILITY_ITF` (4) | `OLE_`, `DV_E_`, `MK_`, `CO_E_`, `EVENT_`, `SCHED_`, `XACT_` |
//! | `FACILITY_WIN32` (7) | mapped Win32 errors (`E_ACCESSDENIED`) |
//! | `FACILITY_WINDOWS` (8) | `CO_E_`, `CO_S_`, `MEM_E_` |
//! | `FACILITY_SECURITY` (9) | `NTE_`, `SEC_`, `CRYPT_`, `OSS_`, `CERTSRV_E_`, `XENROLL_E_`, `TRUST_E_`, `MSSIPOTF_E_` |
//! | `FACILITY_CERT` (11) | `CERT_E_`, `TRUST_E_`, `DIGSIG_E_`, `PERSIST_E_` |
//! | `FACILITY_INTERNET` (12) | `INET_E_` |
//! | `FACILITY_SETUPAPI` (15) | `SPAPI_E_` |
//! | `FACILITY_SCARD` (16) | `SCARD_` |
//! | `FACILITY_COMPLUS` (17) | `COMADMIN_E_`, `COMQC_E_`, `MSDTC_E_` |
//! | `FACILITY_HTTP` (25) | `HTTP_E_STATUS_` |
//! | `FACILITY_USERMODE_FILTER_MANAGER` (31) | `ERROR_FLT_` |
//! | `FACILITY_BACKGROUNDCOPY` (32) | `BG_E_`, `BG_S_` |
//! | `FACILITY_WINDOWSUPDATE` (36) | `WU_E_`, `WU_S_` |
//! | `FACILITY_GRAPHICS` (38) | `ERROR_GRAPHICS_` |
//! | `FACILITY_TPM_SERVICES` (40) | `TPM_E_`, `TBS_E_` |
//! | `FACILITY_TPM_SOFTWARE` (41) | `TPMAPI_E_`, `TBSIMP_E_`, `TPM_E_PPI_` |
//! | `FACILITY_PLA` (48) | `PLA_E_`, `PLA_S_` |
//! | `FACILITY_FVE` (49) | `FVE_E_` |
//! | `FACILITY_FWP` (50) | `FWP_E_` |
//! | `FACILITY_WINRM` (51) | `ERROR_WSMAN_` |
//! | `FACILITY_NDIS` (52) | `ERROR_NDIS_` |
//! | volume manager, BCD, VHD (56-58) | `ERROR_VOLMGR_`, `ERROR_BCD_`, `ERROR_QUERY_` |
//! | `FACILITY_SDIAG` (60) | `SDIAG_E_` |
//! | `FACILITY_WEBSERVICES` (61) | `WS_E_`, `WS_S_` |
//!
//! # Governance
//!
//! - A code declared twice fails the build (`unreachable_patterns` on the
//!   generated dispatch).
//! - An entry declared under the wrong facility block fails the build.
//! - Code `0` cannot be declared.
//! - Name uniqueness, block ordering, facility coverage and the alias table
//!   are checked by the `tests` module at the bottom of this file.
//!
//! Codes that the headers define under more than one name
//! (`DATA_E_FORMATETC` and `DV_E_FORMATETC`, the `*_FIRST` range markers) have
//! one canonical entry here. The other names live in the alias table and never
//! take part in code dispatch.

use crate::{Facility, define_hresult_aliases, define_hresults};

define_hresults! {
    // -------------------------------------------------------------------------
    // FACILITY_NULL (0) - Broadly applicable codes
    // -------------------------------------------------------------------------
    Facility::Null => {
        E_PENDING                                     = (0x8000000A, "The data necessary to complete this operation is not yet available."),
        E_BOUNDS                                      = (0x8000000B, "The operation attempted to access data outside the valid range."),
        E_CHANGED_STATE                               = (0x8000000C, "A concurrent or interleaved operation changed the state of the object, invalidating this operation."),
        E_ILLEGAL_STATE_CHANGE                        = (0x8000000D, "An illegal state change was requested."),
        E_ILLEGAL_METHOD_CALL                         = (0x8000000E, "A method was called at an unexpected time."),
        RO_E_CLOSED                                   = (0x80000013, "The object has been closed."),
        E_NOTIMPL                                     = (0x80004001, "Not implemented."),
        E_NOINTERFACE                                 = (0x80004002, "No such interface supported."),
        E_POINTER                                     = (0x80004003, "Invalid pointer."),
        E_ABORT                                       = (0x80004004, "Operation aborted."),
        E_FAIL                                        = (0x80004005, "Unspecified error."),
        CO_E_INIT_TLS                                 = (0x80004006, "Thread local storage failure."),
        CO_E_INIT_SHARED_ALLOCATOR                    = (0x80004007, "Get shared memory allocator failure."),
        CO_E_INIT_MEMORY_ALLOCATOR                    = (0x80004008, "Get memory allocator failure."),
        CO_E_INIT_CLASS_CACHE                         = (0x80004009, "Unable to initialize class cache."),
        CO_E_INIT_RPC_CHANNEL                         = (0x8000400A, "Unable to initialize remote procedure call (RPC) services."),
        CO_E_INIT_TLS_SET_CHANNEL_CONTROL             = (0x8000400B, "Cannot set thread local storage channel control."),
        CO_E_INIT_TLS_CHANNEL_CONTROL                 = (0x8000400C, "Could not allocate thread local storage channel control."),
        CO_E_INIT_UNACCEPTED_USER_ALLOCATOR           = (0x8000400D, "The user-supplied memory allocator is unacceptable."),
        CO_E_INIT_SCM_MUTEX_EXISTS                    = (0x8000400E, "The OLE service mutex already exists."),
        CO_E_INIT_SCM_FILE_MAPPING_EXISTS             = (0x8000400F, "The OLE service file mapping already exists."),
        CO_E_INIT_SCM_MAP_VIEW_OF_FILE                = (0x80004010, "Unable to map view of file for OLE service."),
        CO_E_INIT_SCM_EXEC_FAILURE                    = (0x80004011, "Failure attempting to launch OLE service."),
        CO_E_INIT_ONLY_SINGLE_THREADED                = (0x80004012, "There was an attempt to call CoInitialize a second time while single-threaded."),
        CO_E_CANT_REMOTE                              = (0x80004013, "A Remote activation was necessary but was not allowed."),
        CO_E_BAD_SERVER_NAME                          = (0x80004014, "A Remote activation was necessary, but the server name provided was invalid."),
        CO_E_WRONG_SERVER_IDENTITY                    = (0x80004015, "The class is configured to run as a security ID different from the caller."),
        CO_E_OLE1DDE_DISABLED                         = (0x80004016, "Use of OLE1 services requiring Dynamic Data Exchange (DDE) Windows is disabled."),
        CO_E_RUNAS_SYNTAX                             = (0x80004017, "A RunAs specification must be <domain name>\\<user name> or simply <user name>."),
        CO_E_CREATEPROCESS_FAILURE                    = (0x80004018, "The server process could not be started. The path name might be incorrect."),
        CO_E_RUNAS_CREATEPROCESS_FAILURE              = (0x80004019, "The server process could not be started as the configured identity. The path name might be incorrect or unavailable."),
        CO_E_RUNAS_LOGON_FAILURE                      = (0x8000401A, "The server process could not be started because the configured identity is incorrect. Check the user name and password."),
        CO_E_LAUNCH_PERMSSION_DENIED                  = (0x8000401B, "The client is not allowed to launch this server."),
        CO_E_START_SERVICE_FAILURE                    = (0x8000401C, "The service providing this server could not be started."),
        CO_E_REMOTE_COMMUNICATION_FAILURE             = (0x8000401D, "This computer was unable to communicate with the computer providing the server."),
        CO_E_SERVER_START_TIMEOUT                     = (0x8000401E, "The server did not respond after being launched."),
        CO_E_CLSREG_INCONSISTENT                      = (0x8000401F, "The registration information for this server is inconsistent or incomplete."),
        CO_E_IIDREG_INCONSISTENT                      = (0x80004020, "The registration information for this interface is inconsistent or incomplete."),
        CO_E_NOT_SUPPORTED                            = (0x80004021, "The operation attempted is not supported."),
        CO_E_RELOAD_DLL                               = (0x80004022, "A DLL must be loaded."),
        CO_E_MSI_ERROR                                = (0x80004023, "A Microsoft Software Installer error was encountered."),
        CO_E_ATTEMPT_TO_CREATE_OUTSIDE_CLIENT_CONTEXT = (0x80004024, "The specified activation could not occur in the client context as specified."),
        CO_E_SERVER_PAUSED                            = (0x80004025, "Activations on the server are paused."),
        CO_E_SERVER_NOT_PAUSED                        = (0x80004026, "Activations on the server are not paused."),
        CO_E_CLASS_DISABLED                           = (0x80004027, "The component or application containing the component has been disabled."),
        CO_E_CLRNOTAVAILABLE                          = (0x80004028, "The common language runtime is not available."),
        CO_E_ASYNC_WORK_REJECTED                      = (0x80004029, "The thread-pool rejected the submitted asynchronous work."),
        CO_E_SERVER_INIT_TIMEOUT                      = (0x8000402A, "The server started, but it did not finish initializing in a timely fashion."),
        CO_E_NO_SECCTX_IN_ACTIVATE                    = (0x8000402B, "Unable to complete the call because there is no COM+ security context inside IObjectControl.Activate."),
        CO_E_TRACKER_CONFIG                           = (0x80004030, "The provided tracker configuration is invalid."),
        CO_E_THREADPOOL_CONFIG                        = (0x80004031, "The provided thread pool configuration is invalid."),
        CO_E_SXS_CONFIG                               = (0x80004032, "The provided side-by-side configuration is invalid."),
        CO_E_MALFORMED_SPN                            = (0x80004033, "The server principal name (SPN) obtained during security negotiation is malformed."),
        E_UNEXPECTED                                  = (0x8000FFFF, "Catastrophic failure."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_RPC (1) - COM RPC runtime and DCOM security
    // -------------------------------------------------------------------------
    Facility::Rpc => {
        RPC_E_CALL_REJECTED               = (0x80010001, "Call was rejected by callee."),
        RPC_E_CALL_CANCELED               = (0x80010002, "Call was canceled by the message filter."),
        RPC_E_CANTPOST_INSENDCALL         = (0x80010003, "The caller is dispatching an intertask SendMessage call and cannot call out via PostMessage."),
        RPC_E_CANTCALLOUT_INASYNCCALL     = (0x80010004, "The caller is dispatching an asynchronous call and cannot make an outgoing call on behalf of this call."),
        RPC_E_CANTCALLOUT_INEXTERNALCALL  = (0x80010005, "It is illegal to call out while inside message filter."),
        RPC_E_CONNECTION_TERMINATED       = (0x80010006, "The connection terminated or is in a bogus state and can no longer be used. Other connections are still valid."),
        RPC_E_SERVER_DIED                 = (0x80010007, "The callee (the server, not the server application) is not available and disappeared; all connections are invalid. The call might have executed."),
        RPC_E_CLIENT_DIED                 = (0x80010008, "The caller (client) disappeared while the callee (server) was processing a call."),
        RPC_E_INVALID_DATAPACKET          = (0x80010009, "The data packet with the marshaled parameter data is incorrect."),
        RPC_E_CANTTRANSMIT_CALL           = (0x8001000A, "The call was not transmitted properly; the message queue was full and was not emptied after yielding."),
        RPC_E_CLIENT_CANTMARSHAL_DATA     = (0x8001000B, "The client RPC caller cannot marshal the parameter data due to errors (such as low memory)."),
        RPC_E_CLIENT_CANTUNMARSHAL_DATA   = (0x8001000C, "The client RPC caller cannot unmarshal the return data due to errors (such as low memory)."),
        RPC_E_SERVER_CANTMARSHAL_DATA     = (0x8001000D, "The server RPC callee cannot marshal the return data due to errors (such as low memory)."),
        RPC_E_SERVER_CANTUNMARSHAL_DATA   = (0x8001000E, "The server RPC callee cannot unmarshal the parameter data due to errors (such as low memory)."),
        RPC_E_INVALID_DATA                = (0x8001000F, "Received data is invalid. The data might be server or client data."),
        RPC_E_INVALID_PARAMETER           = (0x80010010, "A particular parameter is invalid and cannot be (un)marshaled."),
        RPC_E_CANTCALLOUT_AGAIN           = (0x80010011, "There is no second outgoing call on same channel in DDE conversation."),
        RPC_E_SERVER_DIED_DNE             = (0x80010012, "The callee (the server, not the server application) is not available and disappeared; all connections are invalid. The call did not execute."),
        RPC_E_SYS_CALL_FAILED             = (0x80010100, "System call failed."),
        RPC_E_OUT_OF_RESOURCES            = (0x80010101, "Could not allocate some required resource (such as memory or events)"),
        RPC_E_ATTEMPTED_MULTITHREAD       = (0x80010102, "Attempted to make calls on more than one thread in single-threaded mode."),
        RPC_E_NOT_REGISTERED              = (0x80010103, "The requested interface is not registered on the server object."),
        RPC_E_FAULT                       = (0x80010104, "RPC could not call the server or could not return the results of calling the server."),
        RPC_E_SERVERFAULT                 = (0x80010105, "The server threw an exception."),
        RPC_E_CHANGED_MODE                = (0x80010106, "Cannot change thread mode after it is set."),
        RPC_E_INVALIDMETHOD               = (0x80010107, "The method called does not exist on the server."),
        RPC_E_DISCONNECTED                = (0x80010108, "The object invoked has disconnected from its clients."),
        RPC_E_RETRY                       = (0x80010109, "The object invoked chose not to process the call now. Try again later."),
        RPC_E_SERVERCALL_RETRYLATER       = (0x8001010A, "The message filter indicated that the application is busy."),
        RPC_E_SERVERCALL_REJECTED         = (0x8001010B, "The message filter rejected the call."),
        RPC_E_INVALID_CALLDATA            = (0x8001010C, "A call control interface was called with invalid data."),
        RPC_E_CANTCALLOUT_ININPUTSYNCCALL = (0x8001010D, "An outgoing call cannot be made because the application is dispatching an input-synchronous call."),
        RPC_E_WRONG_THREAD                = (0x8001010E, "The application called an interface that was marshaled for a different thread."),
        RPC_E_THREAD_NOT_INIT             = (0x8001010F, "CoInitialize has not been called on the current thread."),
        RPC_E_VERSION_MISMATCH            = (0x80010110, "The version of OLE on the client and server machines does not match."),
        RPC_E_INVALID_HEADER              = (0x80010111, "OLE received a packet with an invalid header."),
        RPC_E_INVALID_EXTENSION           = (0x80010112, "OLE received a packet with an invalid extension."),
        RPC_E_INVALID_IPID                = (0x80010113, "The requested object or interface does not exist."),
        RPC_E_INVALID_OBJECT              = (0x80010114, "The requested object does not exist."),
        RPC_S_CALLPENDING                 = (0x80010115, "OLE has sent a request and is waiting for a reply."),
        RPC_S_WAITONTIMER                 = (0x80010116, "OLE is waiting before retrying a request."),
        RPC_E_CALL_COMPLETE               = (0x80010117, "Call context cannot be accessed after call completed."),
        RPC_E_UNSECURE_CALL               = (0x80010118, "Impersonate on unsecure calls is not supported."),
        RPC_E_TOO_LATE                    = (0x80010119, "Security must be initialized before any interfaces are marshaled or unmarshaled. It cannot be changed after initialized."),
        RPC_E_NO_GOOD_SECURITY_PACKAGES   = (0x8001011A, "No security packages are installed on this machine, the user is not logged on, or there are no compatible security packages between the client and server."),
        RPC_E_ACCESS_DENIED               = (0x8001011B, "Access is denied."),
        RPC_E_REMOTE_DISABLED             = (0x8001011C, "Remote calls are not allowed for this process."),
        RPC_E_INVALID_OBJREF              = (0x8001011D, "The marshaled interface data packet (OBJREF) has an invalid or unknown format."),
        RPC_E_NO_CONTEXT                  = (0x8001011E, "No context is associated with this call. This happens for some custom marshaled calls and on the client side of the call."),
        RPC_E_TIMEOUT                     = (0x8001011F, "This operation returned because the time-out period expired."),
        RPC_E_NO_SYNC                     = (0x80010120, "There are no synchronize objects to wait on."),
        RPC_E_FULLSIC_REQUIRED            = (0x80010121, "Full subject issuer chain Secure Sockets Layer (SSL) principal name expected from the server."),
        RPC_E_INVALID_STD_NAME            = (0x80010122, "Principal name is not a valid Microsoft standard (msstd) name."),
        CO_E_FAILEDTOIMPERSONATE          = (0x80010123, "Unable to impersonate DCOM client."),
        CO_E_FAILEDTOGETSECCTX            = (0x80010124, "Unable to obtain server's security context."),
        CO_E_FAILEDTOOPENTHREADTOKEN      = (0x80010125, "Unable to open the access token of the current thread."),
        CO_E_FAILEDTOGETTOKENINFO         = (0x80010126, "Unable to obtain user information from an access token."),
        CO_E_TRUSTEEDOESNTMATCHCLIENT     = (0x80010127, "The client who called IAccessControl::IsAccessPermitted was not the trustee provided to the method."),
        CO_E_FAILEDTOQUERYCLIENTBLANKET   = (0x80010128, "Unable to obtain the client's security blanket."),
        CO_E_FAILEDTOSETDACL              = (0x80010129, "Unable to set a discretionary access control list (ACL) into a security descriptor."),
        CO_E_ACCESSCHECKFAILED            = (0x8001012A, "The system function AccessCheck returned false."),
        CO_E_NETACCESSAPIFAILED           = (0x8001012B, "Either NetAccessDel or NetAccessAdd returned an error code."),
        CO_E_WRONGTRUSTEENAMESYNTAX       = (0x8001012C, "One of the trustee strings provided by the user did not conform to the <Domain>\\<Name> syntax and it was not the \"*\" string."),
        CO_E_INVALIDSID                   = (0x8001012D, "One of the security identifiers provided by the user was invalid."),
        CO_E_CONVERSIONFAILED             = (0x8001012E, "Unable to convert a wide character trustee string to a multiple-byte trustee string."),
        CO_E_NOMATCHINGSIDFOUND           = (0x8001012F, "Unable to find a security identifier that corresponds to a trustee string provided by the user."),
        CO_E_LOOKUPACCSIDFAILED           = (0x80010130, "The system function LookupAccountSID failed."),
        CO_E_NOMATCHINGNAMEFOUND          = (0x80010131, "Unable to find a trustee name that corresponds to a security identifier provided by the user."),
        CO_E_LOOKUPACCNAMEFAILED          = (0x80010132, "The system function LookupAccountName failed."),
        CO_E_SETSERLHNDLFAILED            = (0x80010133, "Unable to set or reset a serialization handle."),
        CO_E_FAILEDTOGETWINDIR            = (0x80010134, "Unable to obtain the Windows directory."),
        CO_E_PATHTOOLONG                  = (0x80010135, "Path too long."),
        CO_E_FAILEDTOGENUUID              = (0x80010136, "Unable to generate a UUID."),
        CO_E_FAILEDTOCREATEFILE           = (0x80010137, "Unable to create file."),
        CO_E_FAILEDTOCLOSEHANDLE          = (0x80010138, "Unable to close a serialization handle or a file handle."),
        CO_E_EXCEEDSYSACLLIMIT            = (0x80010139, "The number of access control entries (ACEs) in an ACL exceeds the system limit."),
        CO_E_ACESINWRONGORDER             = (0x8001013A, "Not all the DENY_ACCESS ACEs are arranged in front of the GRANT_ACCESS ACEs in the stream."),
        CO_E_INCOMPATIBLESTREAMVERSION    = (0x8001013B, "The version of ACL format in the stream is not supported by this implementation of IAccessControl."),
        CO_E_FAILEDTOOPENPROCESSTOKEN     = (0x8001013C, "Unable to open the access token of the server process."),
        CO_E_DECODEFAILED                 = (0x8001013D, "Unable to decode the ACL in the stream provided by the user."),
        CO_E_ACNOTINITIALIZED             = (0x8001013F, "The COM IAccessControl object is not initialized."),
        CO_E_CANCEL_DISABLED              = (0x80010140, "Call Cancellation is disabled."),
        RPC_E_UNEXPECTED                  = (0x8001FFFF, "An internal error occurred."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_DISPATCH (2) - Automation and type libraries
    // -------------------------------------------------------------------------
    Facility::Dispatch => {
        DISP_E_UNKNOWNINTERFACE        = (0x80020001, "Unknown interface."),
        DISP_E_MEMBERNOTFOUND          = (0x80020003, "Member not found."),
        DISP_E_PARAMNOTFOUND           = (0x80020004, "Parameter not found."),
        DISP_E_TYPEMISMATCH            = (0x80020005, "Type mismatch."),
        DISP_E_UNKNOWNNAME             = (0x80020006, "Unknown name."),
        DISP_E_NONAMEDARGS             = (0x80020007, "No named arguments."),
        DISP_E_BADVARTYPE              = (0x80020008, "Bad variable type."),
        DISP_E_EXCEPTION               = (0x80020009, "Exception occurred."),
        DISP_E_OVERFLOW                = (0x8002000A, "Out of present range."),
        DISP_E_BADINDEX                = (0x8002000B, "Invalid index."),
        DISP_E_UNKNOWNLCID             = (0x8002000C, "Unknown language."),
        DISP_E_ARRAYISLOCKED           = (0x8002000D, "Memory is locked."),
        DISP_E_BADPARAMCOUNT           = (0x8002000E, "Invalid number of parameters."),
        DISP_E_PARAMNOTOPTIONAL        = (0x8002000F, "Parameter not optional."),
        DISP_E_BADCALLEE               = (0x80020010, "Invalid callee."),
        DISP_E_NOTACOLLECTION          = (0x80020011, "Does not support a collection."),
        DISP_E_DIVBYZERO               = (0x80020012, "Division by zero."),
        DISP_E_BUFFERTOOSMALL          = (0x80020013, "Buffer too small."),
        TYPE_E_BUFFERTOOSMALL          = (0x80028016, "Buffer too small."),
        TYPE_E_FIELDNOTFOUND           = (0x80028017, "Field name not defined in the record."),
        TYPE_E_INVDATAREAD             = (0x80028018, "Old format or invalid type library."),
        TYPE_E_UNSUPFORMAT             = (0x80028019, "Old format or invalid type library."),
        TYPE_E_REGISTRYACCESS          = (0x8002801C, "Error accessing the OLE registry."),
        TYPE_E_LIBNOTREGISTERED        = (0x8002801D, "Library not registered."),
        TYPE_E_UNDEFINEDTYPE           = (0x80028027, "Bound to unknown type."),
        TYPE_E_QUALIFIEDNAMEDISALLOWED = (0x80028028, "Qualified name disallowed."),
        TYPE_E_INVALIDSTATE            = (0x80028029, "Invalid forward reference, or reference to uncompiled type."),
        TYPE_E_WRONGTYPEKIND           = (0x8002802A, "Type mismatch."),
        TYPE_E_ELEMENTNOTFOUND         = (0x8002802B, "Element not found."),
        TYPE_E_AMBIGUOUSNAME           = (0x8002802C, "Ambiguous name."),
        TYPE_E_NAMECONFLICT            = (0x8002802D, "Name already exists in the library."),
        TYPE_E_UNKNOWNLCID             = (0x8002802E, "Unknown language code identifier (LCID)."),
        TYPE_E_DLLFUNCTIONNOTFOUND     = (0x8002802F, "Function not defined in specified DLL."),
        TYPE_E_BADMODULEKIND           = (0x800288BD, "Wrong module kind for the operation."),
        TYPE_E_SIZETOOBIG              = (0x800288C5, "Size cannot exceed 64 KB."),
        TYPE_E_DUPLICATEID             = (0x800288C6, "Duplicate ID in inheritance hierarchy."),
        TYPE_E_INVALIDID               = (0x800288CF, "Incorrect inheritance depth in standard OLE hmember."),
        TYPE_E_TYPEMISMATCH            = (0x80028CA0, "Type mismatch."),
        TYPE_E_OUTOFBOUNDS             = (0x80028CA1, "Invalid number of arguments."),
        TYPE_E_IOERROR                 = (0x80028CA2, "I/O error."),
        TYPE_E_CANTCREATETMPFILE       = (0x80028CA3, "Error creating unique .tmp file."),
        TYPE_E_CANTLOADLIBRARY         = (0x80029C4A, "Error loading type library or DLL."),
        TYPE_E_INCONSISTENTPROPFUNCS   = (0x80029C83, "Inconsistent property functions."),
        TYPE_E_CIRCULARTYPE            = (0x80029C84, "Circular dependency between types and modules."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_STORAGE (3) - Structured storage
    // -------------------------------------------------------------------------
    Facility::Storage => {
        STG_S_CONVERTED             = (0x00030200, "The underlying file was converted to compound file format."),
        STG_S_BLOCK                 = (0x00030201, "The storage operation should block until more data is available."),
        STG_S_RETRYNOW              = (0x00030202, "The storage operation should retry immediately."),
        STG_S_MONITORING            = (0x00030203, "The notified event sink will not influence the storage operation."),
        STG_S_MULTIPLEOPENS         = (0x00030204, "Multiple opens prevent consolidated (commit succeeded)."),
        STG_S_CONSOLIDATIONFAILED   = (0x00030205, "Consolidation of the storage file failed (commit succeeded)."),
        STG_S_CANNOTCONSOLIDATE     = (0x00030206, "Consolidation of the storage file is inappropriate (commit succeeded)."),
        STG_E_INVALIDFUNCTION       = (0x80030001, "Unable to perform requested operation."),
        STG_E_FILENOTFOUND          = (0x80030002, "%1 could not be found."),
        STG_E_PATHNOTFOUND          = (0x80030003, "The path %1 could not be found."),
        STG_E_TOOMANYOPENFILES      = (0x80030004, "There are insufficient resources to open another file."),
        STG_E_ACCESSDENIED          = (0x80030005, "Access denied."),
        STG_E_INVALIDHANDLE         = (0x80030006, "Attempted an operation on an invalid object."),
        STG_E_INSUFFICIENTMEMORY    = (0x80030008, "There is insufficient memory available to complete operation."),
        STG_E_INVALIDPOINTER        = (0x80030009, "Invalid pointer error."),
        STG_E_NOMOREFILES           = (0x80030012, "There are no more entries to return."),
        STG_E_DISKISWRITEPROTECTED  = (0x80030013, "Disk is write-protected."),
        STG_E_SEEKERROR             = (0x80030019, "An error occurred during a seek operation."),
        STG_E_WRITEFAULT            = (0x8003001D, "A disk error occurred during a write operation."),
        STG_E_READFAULT             = (0x8003001E, "A disk error occurred during a read operation."),
        STG_E_SHAREVIOLATION        = (0x80030020, "A share violation has occurred."),
        STG_E_LOCKVIOLATION         = (0x80030021, "A lock violation has occurred."),
        STG_E_FILEALREADYEXISTS     = (0x80030050, "%1 already exists."),
        STG_E_INVALIDPARAMETER      = (0x80030057, "Invalid parameter error."),
        STG_E_MEDIUMFULL            = (0x80030070, "There is insufficient disk space to complete operation."),
        STG_E_PROPSETMISMATCHED     = (0x800300F0, "Illegal write of non-simple property to simple property set."),
        STG_E_ABNORMALAPIEXIT       = (0x800300FA, "An application programming interface (API) call exited abnormally."),
        STG_E_INVALIDHEADER         = (0x800300FB, "The file %1 is not a valid compound file."),
        STG_E_INVALIDNAME           = (0x800300FC, "The name %1 is not valid."),
        STG_E_UNKNOWN               = (0x800300FD, "An unexpected error occurred."),
        STG_E_UNIMPLEMENTEDFUNCTION = (0x800300FE, "That function is not implemented."),
        STG_E_INVALIDFLAG           = (0x800300FF, "Invalid flag error."),
        STG_E_INUSE                 = (0x80030100, "Attempted to use an object that is busy."),
        STG_E_NOTCURRENT            = (0x80030101, "The storage has been changed since the last commit."),
        STG_E_REVERTED              = (0x80030102, "Attempted to use an object that has ceased to exist."),
        STG_E_CANTSAVE              = (0x80030103, "Cannot save."),
        STG_E_OLDFORMAT             = (0x80030104, "The compound file %1 was produced with an incompatible version of storage."),
        STG_E_OLDDLL                = (0x80030105, "The compound file %1 was produced with a newer version of storage."),
        STG_E_SHAREREQUIRED         = (0x80030106, "Share.exe or equivalent is required for operation."),
        STG_E_NOTFILEBASEDSTORAGE   = (0x80030107, "Illegal operation called on non-file based storage."),
        STG_E_EXTANTMARSHALLINGS    = (0x80030108, "Illegal operation called on object with extant marshalings."),
        STG_E_DOCFILECORRUPT        = (0x80030109, "The docfile has been corrupted."),
        STG_E_BADBASEADDRESS        = (0x80030110, "OLE32.DLL has been loaded at the wrong address."),
        STG_E_DOCFILETOOLARGE       = (0x80030111, "The compound file is too large for the current implementation."),
        STG_E_NOTSIMPLEFORMAT       = (0x80030112, "The compound file was not created with the STGM_SIMPLE flag."),
        STG_E_INCOMPLETE            = (0x80030201, "The file download was aborted abnormally. The file is incomplete."),
        STG_E_TERMINATED            = (0x80030202, "The file download has been terminated."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_ITF (4) - Interface-specific codes: OLE, monikers, scheduler, transactions
    // -------------------------------------------------------------------------
    Facility::Itf => {
        OLE_S_USEREG                                      = (0x00040000, "Use the registry database to provide the requested information."),
        OLE_S_STATIC                                      = (0x00040001, "Success, but static."),
        OLE_S_MAC_CLIPFORMAT                              = (0x00040002, "Macintosh clipboard format."),
        DRAGDROP_S_DROP                                   = (0x00040100, "Successful drop took place."),
        DRAGDROP_S_CANCEL                                 = (0x00040101, "Drag-drop operation canceled."),
        DRAGDROP_S_USEDEFAULTCURSORS                      = (0x00040102, "Use the default cursor."),
        DATA_S_SAMEFORMATETC                              = (0x00040130, "Data has same FORMATETC."),
        VIEW_S_ALREADY_FROZEN                             = (0x00040140, "View is already frozen."),
        CACHE_S_FORMATETC_NOTSUPPORTED                    = (0x00040170, "FORMATETC not supported."),
        CACHE_S_SAMECACHE                                 = (0x00040171, "Same cache."),
        CACHE_S_SOMECACHES_NOTUPDATED                     = (0x00040172, "Some caches are not updated."),
        OLEOBJ_S_INVALIDVERB                              = (0x00040180, "Invalid verb for OLE object."),
        OLEOBJ_S_CANNOT_DOVERB_NOW                        = (0x00040181, "Verb number is valid but verb cannot be done now."),
        OLEOBJ_S_INVALIDHWND                              = (0x00040182, "Invalid window handle passed."),
        INPLACE_S_TRUNCATED                               = (0x000401A0, "Message is too long; some of it had to be truncated before displaying."),
        CONVERT10_S_NO_PRESENTATION                       = (0x000401C0, "Unable to convert OLESTREAM to IStorage."),
        MK_S_REDUCED_TO_SELF                              = (0x000401E2, "Moniker reduced to itself."),
        MK_S_ME                                           = (0x000401E4, "Common prefix is this moniker."),
        MK_S_HIM                                          = (0x000401E5, "Common prefix is input moniker."),
        MK_S_US                                           = (0x000401E6, "Common prefix is both monikers."),
        MK_S_MONIKERALREADYREGISTERED                     = (0x000401E7, "Moniker is already registered in running object table."),
        EVENT_S_SOME_SUBSCRIBERS_FAILED                   = (0x00040200, "An event was able to invoke some, but not all, of the subscribers."),
        EVENT_S_NOSUBSCRIBERS                             = (0x00040202, "An event was delivered, but there were no subscribers."),
        SCHED_S_TASK_READY                                = (0x00041300, "The task is ready to run at its next scheduled time."),
        SCHED_S_TASK_RUNNING                              = (0x00041301, "The task is currently running."),
        SCHED_S_TASK_DISABLED                             = (0x00041302, "The task will not run at the scheduled times because it has been disabled."),
        SCHED_S_TASK_HAS_NOT_RUN                          = (0x00041303, "The task has not yet run."),
        SCHED_S_TASK_NO_MORE_RUNS                         = (0x00041304, "There are no more runs scheduled for this task."),
        SCHED_S_TASK_NOT_SCHEDULED                        = (0x00041305, "One or more of the properties that are needed to run this task on a schedule have not been set."),
        SCHED_S_TASK_TERMINATED                           = (0x00041306, "The last run of the task was terminated by the user."),
        SCHED_S_TASK_NO_VALID_TRIGGERS                    = (0x00041307, "Either the task has no triggers, or the existing triggers are disabled or not set."),
        SCHED_S_EVENT_TRIGGER                             = (0x00041308, "Event triggers do not have set run times."),
        SCHED_S_SOME_TRIGGERS_FAILED                      = (0x0004131B, "The task is registered, but not all specified triggers will start the task."),
        SCHED_S_BATCH_LOGON_PROBLEM                       = (0x0004131C, "The task is registered, but it might fail to start. Batch logon privilege needs to be enabled for the task principal."),
        XACT_S_ASYNC                                      = (0x0004D000, "An asynchronous operation was specified. The operation has begun, but its outcome is not known yet."),
        XACT_S_READONLY                                   = (0x0004D002, "The method call succeeded because the transaction was read-only."),
        XACT_S_SOMENORETAIN                               = (0x0004D003, "The transaction was successfully aborted. However, this is a coordinated transaction, and a number of enlisted resources were aborted outright because they could not support abort-retaining semantics."),
        XACT_S_OKINFORM                                   = (0x0004D004, "No changes were made during this call, but the sink wants another chance to look if any other sinks make further changes."),
        XACT_S_MADECHANGESCONTENT                         = (0x0004D005, "The sink is content and wants the transaction to proceed. Changes were made to one or more resources during this call."),
        XACT_S_MADECHANGESINFORM                          = (0x0004D006, "The sink is for the moment and wants the transaction to proceed, but if other changes are made following this return by other event sinks, this sink wants another chance to look."),
        XACT_S_ALLNORETAIN                                = (0x0004D007, "The transaction was successfully aborted. However, the abort was nonretaining."),
        XACT_S_ABORTING                                   = (0x0004D008, "An abort operation was already in progress."),
        XACT_S_SINGLEPHASE                                = (0x0004D009, "The resource manager has performed a single-phase commit of the transaction."),
        XACT_S_LOCALLY_OK                                 = (0x0004D00A, "The local transaction has not aborted."),
        XACT_S_LASTRESOURCEMANAGER                        = (0x0004D010, "The resource manager has requested to be the coordinator (last resource manager) for the transaction."),
        OLE_E_OLEVERB                                     = (0x80040000, "Invalid OLEVERB structure."),
        OLE_E_ADVF                                        = (0x80040001, "Invalid advise flags."),
        OLE_E_ENUM_NOMORE                                 = (0x80040002, "Cannot enumerate any more because the associated data is missing."),
        OLE_E_ADVISENOTSUPPORTED                          = (0x80040003, "This implementation does not take advises."),
        OLE_E_NOCONNECTION                                = (0x80040004, "There is no connection for this connection ID."),
        OLE_E_NOTRUNNING                                  = (0x80040005, "Need to run the object to perform this operation."),
        OLE_E_NOCACHE                                     = (0x80040006, "There is no cache to operate on."),
        OLE_E_BLANK                                       = (0x80040007, "Uninitialized object."),
        OLE_E_CLASSDIFF                                   = (0x80040008, "Linked object's source class has changed."),
        OLE_E_CANT_GETMONIKER                             = (0x80040009, "Not able to get the moniker of the object."),
        OLE_E_CANT_BINDTOSOURCE                           = (0x8004000A, "Not able to bind to the source."),
        OLE_E_STATIC                                      = (0x8004000B, "Object is static; operation not allowed."),
        OLE_E_PROMPTSAVECANCELLED                         = (0x8004000C, "User canceled out of the Save dialog box."),
        OLE_E_INVALIDRECT                                 = (0x8004000D, "Invalid rectangle."),
        OLE_E_WRONGCOMPOBJ                                = (0x8004000E, "compobj.dll is too old for the ole2.dll initialized."),
        OLE_E_INVALIDHWND                                 = (0x8004000F, "Invalid window handle."),
        OLE_E_NOT_INPLACEACTIVE                           = (0x80040010, "Object is not in any of the inplace active states."),
        OLE_E_CANTCONVERT                                 = (0x80040011, "Not able to convert object."),
        OLE_E_NOSTORAGE                                   = (0x80040012, "Not able to perform the operation because object is not given storage yet."),
        DV_E_FORMATETC                                    = (0x80040064, "Invalid FORMATETC structure."),
        DV_E_DVTARGETDEVICE                               = (0x80040065, "Invalid DVTARGETDEVICE structure."),
        DV_E_STGMEDIUM                                    = (0x80040066, "Invalid STDGMEDIUM structure."),
        DV_E_STATDATA                                     = (0x80040067, "Invalid STATDATA structure."),
        DV_E_LINDEX                                       = (0x80040068, "Invalid lindex."),
        DV_E_TYMED                                        = (0x80040069, "Invalid TYMED structure."),
        DV_E_CLIPFORMAT                                   = (0x8004006A, "Invalid clipboard format."),
        DV_E_DVASPECT                                     = (0x8004006B, "Invalid aspects."),
        DV_E_DVTARGETDEVICE_SIZE                          = (0x8004006C, "The tdSize parameter of the DVTARGETDEVICE structure is invalid."),
        DV_E_NOIVIEWOBJECT                                = (0x8004006D, "Object does not support IViewObject interface."),
        DRAGDROP_E_NOTREGISTERED                          = (0x80040100, "Trying to revoke a drop target that has not been registered."),
        DRAGDROP_E_ALREADYREGISTERED                      = (0x80040101, "This window has already been registered as a drop target."),
        DRAGDROP_E_INVALIDHWND                            = (0x80040102, "Invalid window handle."),
        CLASS_E_NOAGGREGATION                             = (0x80040110, "Class does not support aggregation (or class object is remote)."),
        CLASS_E_CLASSNOTAVAILABLE                         = (0x80040111, "ClassFactory cannot supply requested class."),
        CLASS_E_NOTLICENSED                               = (0x80040112, "Class is not licensed for use."),
        VIEW_E_DRAW                                       = (0x80040140, "Error drawing view."),
        REGDB_E_READREGDB                                 = (0x80040150, "Could not read key from registry."),
        REGDB_E_WRITEREGDB                                = (0x80040151, "Could not write key to registry."),
        REGDB_E_KEYMISSING                                = (0x80040152, "Could not find the key in the registry."),
        REGDB_E_INVALIDVALUE                              = (0x80040153, "Invalid value for registry."),
        REGDB_E_CLASSNOTREG                               = (0x80040154, "Class not registered."),
        REGDB_E_IIDNOTREG                                 = (0x80040155, "Interface not registered."),
        REGDB_E_BADTHREADINGMODEL                         = (0x80040156, "Threading model entry is not valid."),
        CAT_E_CATIDNOEXIST                                = (0x80040160, "CATID does not exist."),
        CAT_E_NODESCRIPTION                               = (0x80040161, "Description not found."),
        CS_E_PACKAGE_NOTFOUND                             = (0x80040164, "No package in the software installation data in Active Directory meets this criteria."),
        CS_E_NOT_DELETABLE                                = (0x80040165, "Deleting this will break the referential integrity of the software installation data in Active Directory."),
        CS_E_CLASS_NOTFOUND                               = (0x80040166, "The CLSID was not found in the software installation data in Active Directory."),
        CS_E_INVALID_VERSION                              = (0x80040167, "The software installation data in Active Directory is corrupt."),
        CS_E_NO_CLASSSTORE                                = (0x80040168, "There is no software installation data in Active Directory."),
        CS_E_OBJECT_NOTFOUND                              = (0x80040169, "There is no software installation data object in Active Directory."),
        CS_E_OBJECT_ALREADY_EXISTS                        = (0x8004016A, "The software installation data object in Active Directory already exists."),
        CS_E_INVALID_PATH                                 = (0x8004016B, "The path to the software installation data in Active Directory is not correct."),
        CS_E_NETWORK_ERROR                                = (0x8004016C, "A network error interrupted the operation."),
        CS_E_ADMIN_LIMIT_EXCEEDED                         = (0x8004016D, "The size of this object exceeds the maximum size set by the administrator."),
        CS_E_SCHEMA_MISMATCH                              = (0x8004016E, "The schema for the software installation data in Active Directory does not match the required schema."),
        CS_E_INTERNAL_ERROR                               = (0x8004016F, "An error occurred in the software installation data in Active Directory."),
        CACHE_E_NOCACHE_UPDATED                           = (0x80040170, "Cache not updated."),
        OLEOBJ_E_NOVERBS                                  = (0x80040180, "No verbs for OLE object."),
        OLEOBJ_E_INVALIDVERB                              = (0x80040181, "Invalid verb for OLE object."),
        INPLACE_E_NOTUNDOABLE                             = (0x800401A0, "Undo is not available."),
        INPLACE_E_NOTOOLSPACE                             = (0x800401A1, "Space for tools is not available."),
        CONVERT10_E_OLESTREAM_GET                         = (0x800401C0, "OLESTREAM Get method failed."),
        CONVERT10_E_OLESTREAM_PUT                         = (0x800401C1, "OLESTREAM Put method failed."),
        CONVERT10_E_OLESTREAM_FMT                         = (0x800401C2, "Contents of the OLESTREAM not in correct format."),
        CONVERT10_E_OLESTREAM_BITMAP_TO_DIB               = (0x800401C3, "There was an error in a Windows GDI call while converting the bitmap to a device-independent bitmap (DIB)."),
        CONVERT10_E_STG_FMT                               = (0x800401C4, "Contents of the IStorage not in correct format."),
        CONVERT10_E_STG_NO_STD_STREAM                     = (0x800401C5, "Contents of IStorage is missing one of the standard streams."),
        CONVERT10_E_STG_DIB_TO_BITMAP                     = (0x800401C6, "There was an error in a Windows Graphics Device Interface (GDI) call while converting the DIB to a bitmap."),
        CLIPBRD_E_CANT_OPEN                               = (0x800401D0, "OpenClipboard failed."),
        CLIPBRD_E_CANT_EMPTY                              = (0x800401D1, "EmptyClipboard failed."),
        CLIPBRD_E_CANT_SET                                = (0x800401D2, "SetClipboard failed."),
        CLIPBRD_E_BAD_DATA                                = (0x800401D3, "Data on clipboard is invalid."),
        CLIPBRD_E_CANT_CLOSE                              = (0x800401D4, "CloseClipboard failed."),
        MK_E_CONNECTMANUALLY                              = (0x800401E0, "Moniker needs to be connected manually."),
        MK_E_EXCEEDEDDEADLINE                             = (0x800401E1, "Operation exceeded deadline."),
        MK_E_NEEDGENERIC                                  = (0x800401E2, "Moniker needs to be generic."),
        MK_E_UNAVAILABLE                                  = (0x800401E3, "Operation unavailable."),
        MK_E_SYNTAX                                       = (0x800401E4, "Invalid syntax."),
        MK_E_NOOBJECT                                     = (0x800401E5, "No object for moniker."),
        MK_E_INVALIDEXTENSION                             = (0x800401E6, "Bad extension for file."),
        MK_E_INTERMEDIATEINTERFACENOTSUPPORTED            = (0x800401E7, "Intermediate operation failed."),
        MK_E_NOTBINDABLE                                  = (0x800401E8, "Moniker is not bindable."),
        MK_E_NOTBOUND                                     = (0x800401E9, "Moniker is not bound."),
        MK_E_CANTOPENFILE                                 = (0x800401EA, "Moniker cannot open file."),
        MK_E_MUSTBOTHERUSER                               = (0x800401EB, "User input required for operation to succeed."),
        MK_E_NOINVERSE                                    = (0x800401EC, "Moniker class has no inverse."),
        MK_E_NOSTORAGE                                    = (0x800401ED, "Moniker does not refer to storage."),
        MK_E_NOPREFIX                                     = (0x800401EE, "No common prefix."),
        MK_E_ENUMERATION_FAILED                           = (0x800401EF, "Moniker could not be enumerated."),
        CO_E_NOTINITIALIZED                               = (0x800401F0, "CoInitialize has not been called."),
        CO_E_ALREADYINITIALIZED                           = (0x800401F1, "CoInitialize has already been called."),
        CO_E_CANTDETERMINECLASS                           = (0x800401F2, "Class of object cannot be determined."),
        CO_E_CLASSSTRING                                  = (0x800401F3, "Invalid class string."),
        CO_E_IIDSTRING                                    = (0x800401F4, "Invalid interface string."),
        CO_E_APPNOTFOUND                                  = (0x800401F5, "Application not found."),
        CO_E_APPSINGLEUSE                                 = (0x800401F6, "Application cannot be run more than once."),
        CO_E_ERRORINAPP                                   = (0x800401F7, "Some error in application."),
        CO_E_DLLNOTFOUND                                  = (0x800401F8, "DLL for class not found."),
        CO_E_ERRORINDLL                                   = (0x800401F9, "Error in the DLL."),
        CO_E_WRONGOSFORAPP                                = (0x800401FA, "Wrong operating system or operating system version for application."),
        CO_E_OBJNOTREG                                    = (0x800401FB, "Object is not registered."),
        CO_E_OBJISREG                                     = (0x800401FC, "Object is already registered."),
        CO_E_OBJNOTCONNECTED                              = (0x800401FD, "Object is not connected to server."),
        CO_E_APPDIDNTREG                                  = (0x800401FE, "Application was launched, but it did not register a class factory."),
        CO_E_RELEASED                                     = (0x800401FF, "Object has been released."),
        EVENT_E_ALL_SUBSCRIBERS_FAILED                    = (0x80040201, "An event was unable to invoke any of the subscribers."),
        EVENT_E_QUERYSYNTAX                               = (0x80040203, "A syntax error occurred trying to evaluate a query string."),
        EVENT_E_QUERYFIELD                                = (0x80040204, "An invalid field name was used in a query string."),
        EVENT_E_INTERNALEXCEPTION                         = (0x80040205, "An unexpected exception was raised."),
        EVENT_E_INTERNALERROR                             = (0x80040206, "An unexpected internal error was detected."),
        EVENT_E_INVALID_PER_USER_SID                      = (0x80040207, "The owner security identifier (SID) on a per-user subscription does not exist."),
        EVENT_E_USER_EXCEPTION                            = (0x80040208, "A user-supplied component or subscriber raised an exception."),
        EVENT_E_TOO_MANY_METHODS                          = (0x80040209, "An interface has too many methods to fire events from."),
        EVENT_E_MISSING_EVENTCLASS                        = (0x8004020A, "A subscription cannot be stored unless its event class already exists."),
        EVENT_E_NOT_ALL_REMOVED                           = (0x8004020B, "Not all the objects requested could be removed."),
        EVENT_E_COMPLUS_NOT_INSTALLED                     = (0x8004020C, "COM+ is required for this operation, but it is not installed."),
        EVENT_E_CANT_MODIFY_OR_DELETE_UNCONFIGURED_OBJECT = (0x8004020D, "Cannot modify or delete an object that was not added using the COM+ Administrative SDK."),
        EVENT_E_CANT_MODIFY_OR_DELETE_CONFIGURED_OBJECT   = (0x8004020E, "Cannot modify or delete an object that was added using the COM+ Administrative SDK."),
        EVENT_E_INVALID_EVENT_CLASS_PARTITION             = (0x8004020F, "The event class for this subscription is in an invalid partition."),
        EVENT_E_PER_USER_SID_NOT_LOGGED_ON                = (0x80040210, "The owner of the PerUser subscription is not logged on to the system specified."),
        SCHED_E_TRIGGER_NOT_FOUND                         = (0x80041309, "A task's trigger is not found."),
        SCHED_E_TASK_NOT_READY                            = (0x8004130A, "One or more of the properties required to run this task have not been set."),
        SCHED_E_TASK_NOT_RUNNING                          = (0x8004130B, "There is no running instance of the task."),
        SCHED_E_SERVICE_NOT_INSTALLED                     = (0x8004130C, "The Task Scheduler service is not installed on this computer."),
        SCHED_E_CANNOT_OPEN_TASK                          = (0x8004130D, "The task object could not be opened."),
        SCHED_E_INVALID_TASK                              = (0x8004130E, "The object is either an invalid task object or is not a task object."),
        SCHED_E_ACCOUNT_INFORMATION_NOT_SET               = (0x8004130F, "No account information could be found in the Task Scheduler security database for the task indicated."),
        SCHED_E_ACCOUNT_NAME_NOT_FOUND                    = (0x80041310, "Unable to establish existence of the account specified."),
        SCHED_E_ACCOUNT_DBASE_CORRUPT                     = (0x80041311, "Corruption was detected in the Task Scheduler security database; the database has been reset."),
        SCHED_E_NO_SECURITY_SERVICES                      = (0x80041312, "Task Scheduler security services are available only on Windows NT operating system."),
        SCHED_E_UNKNOWN_OBJECT_VERSION                    = (0x80041313, "The task object version is either unsupported or invalid."),
        SCHED_E_UNSUPPORTED_ACCOUNT_OPTION                = (0x80041314, "The task has been configured with an unsupported combination of account settings and run-time options."),
        SCHED_E_SERVICE_NOT_RUNNING                       = (0x80041315, "The Task Scheduler service is not running."),
        SCHED_E_UNEXPECTEDNODE                            = (0x80041316, "The task XML contains an unexpected node."),
        SCHED_E_NAMESPACE                                 = (0x80041317, "The task XML contains an element or attribute from an unexpected namespace."),
        SCHED_E_INVALIDVALUE                              = (0x80041318, "The task XML contains a value that is incorrectly formatted or out of range."),
        SCHED_E_MISSINGNODE                               = (0x80041319, "The task XML is missing a required element or attribute."),
        SCHED_E_MALFORMEDXML                              = (0x8004131A, "The task XML is malformed."),
        SCHED_E_TOO_MANY_NODES                            = (0x8004131D, "The task XML contains too many nodes of the same type."),
        SCHED_E_PAST_END_BOUNDARY                         = (0x8004131E, "The task cannot be started after the trigger's end boundary."),
        SCHED_E_ALREADY_RUNNING                           = (0x8004131F, "An instance of this task is already running."),
        SCHED_E_USER_NOT_LOGGED_ON                        = (0x80041320, "The task will not run because the user is not logged on."),
        SCHED_E_INVALID_TASK_HASH                         = (0x80041321, "The task image is corrupt or has been tampered with."),
        SCHED_E_SERVICE_NOT_AVAILABLE                     = (0x80041322, "The Task Scheduler service is not available."),
        SCHED_E_SERVICE_TOO_BUSY                          = (0x80041323, "The Task Scheduler service is too busy to handle your request. Try again later."),
        SCHED_E_TASK_ATTEMPTED                            = (0x80041324, "The Task Scheduler service attempted to run the task, but the task did not run due to one of the constraints in the task definition."),
        SCHED_E_TASK_DISABLED                             = (0x80041326, "The task is disabled."),
        SCHED_E_TASK_NOT_V1_COMPAT                        = (0x80041327, "The task has properties that are not compatible with earlier versions of Windows."),
        SCHED_E_START_ON_DEMAND                           = (0x80041328, "The task settings do not allow the task to start on demand."),
        XACT_E_ALREADYOTHERSINGLEPHASE                    = (0x8004D000, "Another single phase resource manager has already been enlisted in this transaction."),
        XACT_E_CANTRETAIN                                 = (0x8004D001, "A retaining commit or abort is not supported."),
        XACT_E_COMMITFAILED                               = (0x8004D002, "The transaction failed to commit for an unknown reason. The transaction was aborted."),
        XACT_E_COMMITPREVENTED                            = (0x8004D003, "Cannot call commit on this transaction object because the calling application did not initiate the transaction."),
        XACT_E_HEURISTICABORT                             = (0x8004D004, "Instead of committing, the resource heuristically aborted."),
        XACT_E_HEURISTICCOMMIT                            = (0x8004D005, "Instead of aborting, the resource heuristically committed."),
        XACT_E_HEURISTICDAMAGE                            = (0x8004D006, "Some of the states of the resource were committed while others were aborted, likely because of heuristic decisions."),
        XACT_E_HEURISTICDANGER                            = (0x8004D007, "Some of the states of the resource might have been committed while others were aborted, likely because of heuristic decisions."),
        XACT_E_ISOLATIONLEVEL                             = (0x8004D008, "The requested isolation level is not valid or supported."),
        XACT_E_NOASYNC                                    = (0x8004D009, "The transaction manager does not support an asynchronous operation for this method."),
        XACT_E_NOENLIST                                   = (0x8004D00A, "Unable to enlist in the transaction."),
        XACT_E_NOISORETAIN                                = (0x8004D00B, "The requested semantics of retention of isolation across retaining commit and abort boundaries cannot be supported by this transaction implementation, or isoFlags was not equal to 0."),
        XACT_E_NORESOURCE                                 = (0x8004D00C, "There is no resource presently associated with this enlistment."),
        XACT_E_NOTCURRENT                                 = (0x8004D00D, "The transaction failed to commit due to the failure of optimistic concurrency control in at least one of the resource managers."),
        XACT_E_NOTRANSACTION                              = (0x8004D00E, "The transaction has already been implicitly or explicitly committed or aborted."),
        XACT_E_NOTSUPPORTED                               = (0x8004D00F, "An invalid combination of flags was specified."),
        XACT_E_UNKNOWNRMGRID                              = (0x8004D010, "The resource manager ID is not associated with this transaction or the transaction manager."),
        XACT_E_WRONGSTATE                                 = (0x8004D011, "This method was called in the wrong state."),
        XACT_E_WRONGUOW                                   = (0x8004D012, "The indicated unit of work does not match the unit of work expected by the resource manager."),
        XACT_E_XTIONEXISTS                                = (0x8004D013, "An enlistment in a transaction already exists."),
        XACT_E_NOIMPORTOBJECT                             = (0x8004D014, "An import object for the transaction could not be found."),
        XACT_E_INVALIDCOOKIE                              = (0x8004D015, "The transaction cookie is invalid."),
        XACT_E_INDOUBT                                    = (0x8004D016, "The transaction status is in doubt. A communication failure occurred, or a transaction manager or resource manager has failed."),
        XACT_E_NOTIMEOUT                                  = (0x8004D017, "A time-out was specified, but time-outs are not supported."),
        XACT_E_ALREADYINPROGRESS                          = (0x8004D018, "The requested operation is already in progress for the transaction."),
        XACT_E_ABORTED                                    = (0x8004D019, "The transaction has already been aborted."),
        XACT_E_LOGFULL                                    = (0x8004D01A, "The Transaction Manager returned a log full error."),
        XACT_E_TMNOTAVAILABLE                             = (0x8004D01B, "The transaction manager is not available."),
        XACT_E_CONNECTION_DOWN                            = (0x8004D01C, "A connection with the transaction manager was lost."),
        XACT_E_CONNECTION_DENIED                          = (0x8004D01D, "A request to establish a connection with the transaction manager was denied."),
        XACT_E_REENLISTTIMEOUT                            = (0x8004D01E, "Resource manager reenlistment to determine transaction status timed out."),
        XACT_E_TIP_CONNECT_FAILED                         = (0x8004D01F, "The transaction manager failed to establish a connection with another Transaction Internet Protocol (TIP) transaction manager."),
        XACT_E_TIP_PROTOCOL_ERROR                         = (0x8004D020, "The transaction manager encountered a protocol error with another TIP transaction manager."),
        XACT_E_TIP_PULL_FAILED                            = (0x8004D021, "The transaction manager could not propagate a transaction from another TIP transaction manager."),
        XACT_E_DEST_TMNOTAVAILABLE                        = (0x8004D022, "The transaction manager on the destination machine is not available."),
        XACT_E_TIP_DISABLED                               = (0x8004D023, "The transaction manager has disabled its support for TIP."),
        XACT_E_NETWORK_TX_DISABLED                        = (0x8004D024, "The transaction manager has disabled its support for remote or network transactions."),
        XACT_E_PARTNER_NETWORK_TX_DISABLED                = (0x8004D025, "The partner transaction manager has disabled its support for remote or network transactions."),
        XACT_E_XA_TX_DISABLED                             = (0x8004D026, "The transaction manager has disabled its support for XA transactions."),
        XACT_E_UNABLE_TO_READ_DTC_CONFIG                  = (0x8004D027, "Microsoft Distributed Transaction Coordinator (MSDTC) was unable to read its configuration information."),
        XACT_E_UNABLE_TO_LOAD_DTC_PROXY                   = (0x8004D028, "MSDTC was unable to load the DTC proxy DLL."),
        XACT_E_ABORTING                                   = (0x8004D029, "The local transaction has aborted."),
        XACT_E_CLERKNOTFOUND                              = (0x8004D080, "The specified CRM clerk was not found. It might have completed before it could be held."),
        XACT_E_CLERKEXISTS                                = (0x8004D081, "The specified CRM clerk does not exist."),
        XACT_E_RECOVERYINPROGRESS                         = (0x8004D082, "Recovery of the CRM log file is still in progress."),
        XACT_E_TRANSACTIONCLOSED                          = (0x8004D083, "The transaction has completed, and the log records have been discarded from the log file. They are no longer available."),
        XACT_E_INVALIDLSN                                 = (0x8004D084, "lsnToRead is outside of the current limits of the log"),
        XACT_E_REPLAYREQUEST                              = (0x8004D085, "The COM+ Compensating Resource Manager has records it wishes to replay."),
        XACT_E_CONNECTION_REQUEST_DENIED                  = (0x8004D100, "The request to connect to the specified transaction coordinator was denied."),
        XACT_E_TOOMANY_ENLISTMENTS                        = (0x8004D101, "The maximum number of enlistments for the specified transaction has been reached."),
        XACT_E_DUPLICATE_GUID                             = (0x8004D102, "A resource manager with the same identifier is already registered with the specified transaction coordinator."),
        XACT_E_NOTSINGLEPHASE                             = (0x8004D103, "The prepare request given was not eligible for single-phase optimizations."),
        XACT_E_RECOVERYALREADYDONE                        = (0x8004D104, "RecoveryComplete has already been called for the given resource manager."),
        XACT_E_PROTOCOL                                   = (0x8004D105, "The interface call made was incorrect for the current state of the protocol."),
        XACT_E_RM_FAILURE                                 = (0x8004D106, "The xa_open call failed for the XA resource."),
        XACT_E_RECOVERY_FAILED                            = (0x8004D107, "The xa_recover call failed for the XA resource."),
        XACT_E_LU_NOT_FOUND                               = (0x8004D108, "The logical unit of work specified cannot be found."),
        XACT_E_DUPLICATE_LU                               = (0x8004D109, "The specified logical unit of work already exists."),
        XACT_E_LU_NOT_CONNECTED                           = (0x8004D10A, "Subordinate creation failed. The specified logical unit of work was not connected."),
        XACT_E_DUPLICATE_TRANSID                          = (0x8004D10B, "A transaction with the given identifier already exists."),
        XACT_E_LU_BUSY                                    = (0x8004D10C, "The resource is in use."),
        XACT_E_LU_NO_RECOVERY_PROCESS                     = (0x8004D10D, "The LU Recovery process is down."),
        XACT_E_LU_DOWN                                    = (0x8004D10E, "The remote session was lost."),
        XACT_E_LU_RECOVERING                              = (0x8004D10F, "The resource is currently recovering."),
        XACT_E_LU_RECOVERY_MISMATCH                       = (0x8004D110, "There was a mismatch in driving recovery."),
        XACT_E_RM_UNAVAILABLE                             = (0x8004D111, "An error occurred with the XA resource."),
        CONTEXT_E_ABORTED                                 = (0x8004E002, "The root transaction wanted to commit, but the transaction aborted."),
        CONTEXT_E_ABORTING                                = (0x8004E003, "The COM+ component on which the method call was made has a transaction that has already aborted or is in the process of aborting."),
        CONTEXT_E_NOCONTEXT                               = (0x8004E004, "There is no Microsoft Transaction Server (MTS) object context."),
        CONTEXT_E_WOULD_DEADLOCK                          = (0x8004E005, "The component is configured to use synchronization, and this method call would cause a deadlock to occur."),
        CONTEXT_E_SYNCH_TIMEOUT                           = (0x8004E006, "The component is configured to use synchronization, and a thread has timed out waiting to enter the context."),
        CONTEXT_E_OLDREF                                  = (0x8004E007, "You made a method call on a COM+ component that has a transaction that has already committed or aborted."),
        CONTEXT_E_ROLENOTFOUND                            = (0x8004E00C, "The specified role was not configured for the application."),
        CONTEXT_E_TMNOTAVAILABLE                          = (0x8004E00F, "COM+ was unable to talk to the MSDTC."),
        CO_E_ACTIVATIONFAILED                             = (0x8004E021, "An unexpected error occurred during COM+ activation."),
        CO_E_ACTIVATIONFAILED_EVENTLOGGED                 = (0x8004E022, "COM+ activation failed. Check the event log for more information."),
        CO_E_ACTIVATIONFAILED_CATALOGERROR                = (0x8004E023, "COM+ activation failed due to a catalog or configuration error."),
        CO_E_ACTIVATIONFAILED_TIMEOUT                     = (0x8004E024, "COM+ activation failed because the activation could not be completed in the specified amount of time."),
        CO_E_INITIALIZATIONFAILED                         = (0x8004E025, "COM+ activation failed because an initialization function failed. Check the event log for more information."),
        CONTEXT_E_NOJIT                                   = (0x8004E026, "The requested operation requires that just-in-time (JIT) be in the current context, and it is not."),
        CONTEXT_E_NOTRANSACTION                           = (0x8004E027, "The requested operation requires that the current context have a transaction, and it does not."),
        CO_E_THREADINGMODEL_CHANGED                       = (0x8004E028, "The components threading model has changed after install into a COM+ application. Re-install component."),
        CO_E_NOIISINTRINSICS                              = (0x8004E029, "Internet Information Services (IIS) intrinsics not available. Start your work with IIS."),
        CO_E_NOCOOKIES                                    = (0x8004E02A, "An attempt to write a cookie failed."),
        CO_E_DBERROR                                      = (0x8004E02B, "An attempt to use a database generated a database-specific error."),
        CO_E_NOTPOOLED                                    = (0x8004E02C, "The COM+ component you created must use object pooling to work."),
        CO_E_NOTCONSTRUCTED                               = (0x8004E02D, "The COM+ component you created must use object construction to work correctly."),
        CO_E_NOSYNCHRONIZATION                            = (0x8004E02E, "The COM+ component requires synchronization, and it is not configured for it."),
        CO_E_ISOLEVELMISMATCH                             = (0x8004E02F, "The TxIsolation Level property for the COM+ component being created is stronger than the TxIsolationLevel for the root."),
        CO_E_CALL_OUT_OF_TX_SCOPE_NOT_ALLOWED             = (0x8004E030, "The component attempted to make a cross-context call between invocations of EnterTransactionScope and ExitTransactionScope. This is not allowed. Cross-context calls cannot be made while inside a transaction scope."),
        CO_E_EXIT_TRANSACTION_SCOPE_NOT_CALLED            = (0x8004E031, "The component made a call to EnterTransactionScope, but did not make a corresponding call to ExitTransactionScope before returning."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_WIN32 (7) - Named Win32 error mappings
    // -------------------------------------------------------------------------
    Facility::Win32 => {
        E_ACCESSDENIED          = (0x80070005, "General access denied error."),
        E_HANDLE                = (0x80070006, "Handle that is not valid."),
        E_OUTOFMEMORY           = (0x8007000E, "Failed to allocate necessary memory."),
        E_INVALIDARG            = (0x80070057, "One or more arguments are invalid."),
        E_NOT_SUFFICIENT_BUFFER = (0x8007007A, "The data area passed to a system call is too small."),
        E_NOT_SET               = (0x80070490, "Element not found."),
        E_NOT_VALID_STATE       = (0x8007139F, "The group or resource is not in the correct state to perform the requested operation."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_WINDOWS (8) - Service Control Manager activation
    // -------------------------------------------------------------------------
    Facility::Windows => {
        CO_S_NOTALLINTERFACES        = (0x00080012, "Not all the requested interfaces were available."),
        CO_S_MACHINENAMENOTFOUND     = (0x00080013, "The specified machine name was not found in the cache."),
        CO_E_CLASS_CREATE_FAILED     = (0x80080001, "Attempt to create a class object failed."),
        CO_E_SCM_ERROR               = (0x80080002, "OLE service could not bind object."),
        CO_E_SCM_RPC_FAILURE         = (0x80080003, "RPC communication failed with OLE service."),
        CO_E_BAD_PATH                = (0x80080004, "Bad path to object."),
        CO_E_SERVER_EXEC_FAILURE     = (0x80080005, "Server execution failed."),
        CO_E_OBJSRV_RPC_FAILURE      = (0x80080006, "OLE service could not communicate with the object server."),
        MK_E_NO_NORMALIZED           = (0x80080007, "Moniker path could not be normalized."),
        CO_E_SERVER_STOPPING         = (0x80080008, "Object server is stopping when OLE service contacts it."),
        MEM_E_INVALID_ROOT           = (0x80080009, "An invalid root block pointer was specified."),
        MEM_E_INVALID_LINK           = (0x80080010, "An allocation chain contained an invalid link pointer."),
        MEM_E_INVALID_SIZE           = (0x80080011, "The requested allocation size was too large."),
        CO_E_MISSING_DISPLAYNAME     = (0x80080015, "The activation requires a display name to be present under the class identifier (CLSID) key."),
        CO_E_RUNAS_VALUE_MUST_BE_AAA = (0x80080016, "The activation requires that the RunAs value for the application is Activate As Activator."),
        CO_E_ELEVATION_DISABLED      = (0x80080017, "The class is not configured to support elevated activation."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_SECURITY (9) - CryptoAPI and SSPI
    // -------------------------------------------------------------------------
    Facility::Security => {
        SEC_I_CONTINUE_NEEDED                     = (0x00090312, "The function completed successfully, but it must be called again to complete the context."),
        SEC_I_COMPLETE_NEEDED                     = (0x00090313, "The function completed successfully, but CompleteToken must be called."),
        SEC_I_COMPLETE_AND_CONTINUE               = (0x00090314, "The function completed successfully, but both CompleteToken and this function must be called to complete the context."),
        SEC_I_LOCAL_LOGON                         = (0x00090315, "The logon was completed, but no network authority was available. The logon was made using locally known information."),
        SEC_I_CONTEXT_EXPIRED                     = (0x00090317, "The context has expired and can no longer be used."),
        SEC_I_INCOMPLETE_CREDENTIALS              = (0x00090320, "The credentials supplied were not complete and could not be verified. Additional information can be returned from the context."),
        SEC_I_RENEGOTIATE                         = (0x00090321, "The context data must be renegotiated with the peer."),
        SEC_I_NO_LSA_CONTEXT                      = (0x00090323, "There is no LSA mode context associated with this context."),
        SEC_I_SIGNATURE_NEEDED                    = (0x0009035C, "A signature operation must be performed before the user can authenticate."),
        SEC_I_NO_RENEGOTIATION                    = (0x00090364, "The recipient rejected the renegotiation request."),
        CRYPT_I_NEW_PROTECTION_REQUIRED           = (0x00091012, "Protected data needs to be reprotected."),
        NTE_BAD_UID                               = (0x80090001, "Bad UID."),
        NTE_BAD_HASH                              = (0x80090002, "Bad hash."),
        NTE_BAD_KEY                               = (0x80090003, "Bad key."),
        NTE_BAD_LEN                               = (0x80090004, "Bad length."),
        NTE_BAD_DATA                              = (0x80090005, "Bad data."),
        NTE_BAD_SIGNATURE                         = (0x80090006, "Invalid signature."),
        NTE_BAD_VER                               = (0x80090007, "Bad version of provider."),
        NTE_BAD_ALGID                             = (0x80090008, "Invalid algorithm specified."),
        NTE_BAD_FLAGS                             = (0x80090009, "Invalid flags specified."),
        NTE_BAD_TYPE                              = (0x8009000A, "Invalid type specified."),
        NTE_BAD_KEY_STATE                         = (0x8009000B, "Key not valid for use in specified state."),
        NTE_BAD_HASH_STATE                        = (0x8009000C, "Hash not valid for use in specified state."),
        NTE_NO_KEY                                = (0x8009000D, "Key does not exist."),
        NTE_NO_MEMORY                             = (0x8009000E, "Insufficient memory available for the operation."),
        NTE_EXISTS                                = (0x8009000F, "Object already exists."),
        NTE_PERM                                  = (0x80090010, "Access denied."),
        NTE_NOT_FOUND                             = (0x80090011, "Object was not found."),
        NTE_DOUBLE_ENCRYPT                        = (0x80090012, "Data already encrypted."),
        NTE_BAD_PROVIDER                          = (0x80090013, "Invalid provider specified."),
        NTE_BAD_PROV_TYPE                         = (0x80090014, "Invalid provider type specified."),
        NTE_BAD_PUBLIC_KEY                        = (0x80090015, "Provider's public key is invalid."),
        NTE_BAD_KEYSET                            = (0x80090016, "Keyset does not exist."),
        NTE_PROV_TYPE_NOT_DEF                     = (0x80090017, "Provider type not defined."),
        NTE_PROV_TYPE_ENTRY_BAD                   = (0x80090018, "The provider type, as registered, is invalid."),
        NTE_KEYSET_NOT_DEF                        = (0x80090019, "The keyset is not defined."),
        NTE_KEYSET_ENTRY_BAD                      = (0x8009001A, "The keyset, as registered, is invalid."),
        NTE_PROV_TYPE_NO_MATCH                    = (0x8009001B, "Provider type does not match registered value."),
        NTE_SIGNATURE_FILE_BAD                    = (0x8009001C, "The digital signature file is corrupt."),
        NTE_PROVIDER_DLL_FAIL                     = (0x8009001D, "Provider DLL failed to initialize correctly."),
        NTE_PROV_DLL_NOT_FOUND                    = (0x8009001E, "Provider DLL could not be found."),
        NTE_BAD_KEYSET_PARAM                      = (0x8009001F, "The keyset parameter is invalid."),
        NTE_FAIL                                  = (0x80090020, "An internal error occurred."),
        NTE_SYS_ERR                               = (0x80090021, "A base error occurred."),
        NTE_SILENT_CONTEXT                        = (0x80090022, "Provider could not perform the action because the context was acquired as silent."),
        NTE_TOKEN_KEYSET_STORAGE_FULL             = (0x80090023, "The security token does not have storage space available for an additional container."),
        NTE_TEMPORARY_PROFILE                     = (0x80090024, "The profile for the user is a temporary profile."),
        NTE_FIXEDPARAMETER                        = (0x80090025, "The key parameters could not be set because the configuration service provider (CSP) uses fixed parameters."),
        NTE_INVALID_HANDLE                        = (0x80090026, "The supplied handle is invalid."),
        NTE_INVALID_PARAMETER                     = (0x80090027, "The parameter is incorrect."),
        NTE_BUFFER_TOO_SMALL                      = (0x80090028, "The buffer supplied to a function was too small."),
        NTE_NOT_SUPPORTED                         = (0x80090029, "The requested operation is not supported."),
        NTE_NO_MORE_ITEMS                         = (0x8009002A, "No more data is available."),
        NTE_BUFFERS_OVERLAP                       = (0x8009002B, "The supplied buffers overlap incorrectly."),
        NTE_DECRYPTION_FAILURE                    = (0x8009002C, "The specified data could not be decrypted."),
        NTE_INTERNAL_ERROR                        = (0x8009002D, "An internal consistency check failed."),
        NTE_UI_REQUIRED                           = (0x8009002E, "This operation requires input from the user."),
        NTE_HMAC_NOT_SUPPORTED                    = (0x8009002F, "The cryptographic provider does not support Hash Message Authentication Code (HMAC)."),
        SEC_E_INSUFFICIENT_MEMORY                 = (0x80090300, "Not enough memory is available to complete this request."),
        SEC_E_INVALID_HANDLE                      = (0x80090301, "The handle specified is invalid."),
        SEC_E_UNSUPPORTED_FUNCTION                = (0x80090302, "The function requested is not supported."),
        SEC_E_TARGET_UNKNOWN                      = (0x80090303, "The specified target is unknown or unreachable."),
        SEC_E_INTERNAL_ERROR                      = (0x80090304, "The Local Security Authority (LSA) cannot be contacted."),
        SEC_E_SECPKG_NOT_FOUND                    = (0x80090305, "The requested security package does not exist."),
        SEC_E_NOT_OWNER                           = (0x80090306, "The caller is not the owner of the desired credentials."),
        SEC_E_CANNOT_INSTALL                      = (0x80090307, "The security package failed to initialize and cannot be installed."),
        SEC_E_INVALID_TOKEN                       = (0x80090308, "The token supplied to the function is invalid."),
        SEC_E_CANNOT_PACK                         = (0x80090309, "The security package is not able to marshal the logon buffer, so the logon attempt has failed."),
        SEC_E_QOP_NOT_SUPPORTED                   = (0x8009030A, "The per-message quality of protection is not supported by the security package."),
        SEC_E_NO_IMPERSONATION                    = (0x8009030B, "The security context does not allow impersonation of the client."),
        SEC_E_LOGON_DENIED                        = (0x8009030C, "The logon attempt failed."),
        SEC_E_UNKNOWN_CREDENTIALS                 = (0x8009030D, "The credentials supplied to the package were not recognized."),
        SEC_E_NO_CREDENTIALS                      = (0x8009030E, "No credentials are available in the security package."),
        SEC_E_MESSAGE_ALTERED                     = (0x8009030F, "The message or signature supplied for verification has been altered."),
        SEC_E_OUT_OF_SEQUENCE                     = (0x80090310, "The message supplied for verification is out of sequence."),
        SEC_E_NO_AUTHENTICATING_AUTHORITY         = (0x80090311, "No authority could be contacted for authentication."),
        SEC_E_BAD_PKGID                           = (0x80090316, "The requested security package does not exist."),
        SEC_E_CONTEXT_EXPIRED                     = (0x80090317, "The context has expired and can no longer be used."),
        SEC_E_INCOMPLETE_MESSAGE                  = (0x80090318, "The supplied message is incomplete. The signature was not verified."),
        SEC_E_INCOMPLETE_CREDENTIALS              = (0x80090320, "The credentials supplied were not complete and could not be verified. The context could not be initialized."),
        SEC_E_BUFFER_TOO_SMALL                    = (0x80090321, "The buffers supplied to a function was too small."),
        SEC_E_WRONG_PRINCIPAL                     = (0x80090322, "The target principal name is incorrect."),
        SEC_E_TIME_SKEW                           = (0x80090324, "The clocks on the client and server machines are skewed."),
        SEC_E_UNTRUSTED_ROOT                      = (0x80090325, "The certificate chain was issued by an authority that is not trusted."),
        SEC_E_ILLEGAL_MESSAGE                     = (0x80090326, "The message received was unexpected or badly formatted."),
        SEC_E_CERT_UNKNOWN                        = (0x80090327, "An unknown error occurred while processing the certificate."),
        SEC_E_CERT_EXPIRED                        = (0x80090328, "The received certificate has expired."),
        SEC_E_ENCRYPT_FAILURE                     = (0x80090329, "The specified data could not be encrypted."),
        SEC_E_DECRYPT_FAILURE                     = (0x80090330, "The specified data could not be decrypted."),
        SEC_E_ALGORITHM_MISMATCH                  = (0x80090331, "The client and server cannot communicate because they do not possess a common algorithm."),
        SEC_E_SECURITY_QOS_FAILED                 = (0x80090332, "The security context could not be established due to a failure in the requested quality of service (for example, mutual authentication or delegation)."),
        SEC_E_UNFINISHED_CONTEXT_DELETED          = (0x80090333, "A security context was deleted before the context was completed. This is considered a logon failure."),
        SEC_E_NO_TGT_REPLY                        = (0x80090334, "The client is trying to negotiate a context and the server requires user-to-user but did not send a ticket granting ticket (TGT) reply."),
        SEC_E_NO_IP_ADDRESSES                     = (0x80090335, "Unable to accomplish the requested task because the local machine does not have an IP addresses."),
        SEC_E_WRONG_CREDENTIAL_HANDLE             = (0x80090336, "The supplied credential handle does not match the credential associated with the security context."),
        SEC_E_CRYPTO_SYSTEM_INVALID               = (0x80090337, "The cryptographic system or checksum function is invalid because a required function is unavailable."),
        SEC_E_MAX_REFERRALS_EXCEEDED              = (0x80090338, "The number of maximum ticket referrals has been exceeded."),
        SEC_E_MUST_BE_KDC                         = (0x80090339, "The local machine must be a Kerberos domain controller (KDC), and it is not."),
        SEC_E_STRONG_CRYPTO_NOT_SUPPORTED         = (0x8009033A, "The other end of the security negotiation requires strong crypto, but it is not supported on the local machine."),
        SEC_E_TOO_MANY_PRINCIPALS                 = (0x8009033B, "The KDC reply contained more than one principal name."),
        SEC_E_NO_PA_DATA                          = (0x8009033C, "Expected to find PA data for a hint of what etype to use, but it was not found."),
        SEC_E_PKINIT_NAME_MISMATCH                = (0x8009033D, "The client certificate does not contain a valid user principal name (UPN), or does not match the client name in the logon request. Contact your administrator."),
        SEC_E_SMARTCARD_LOGON_REQUIRED            = (0x8009033E, "Smart card logon is required and was not used."),
        SEC_E_SHUTDOWN_IN_PROGRESS                = (0x8009033F, "A system shutdown is in progress."),
        SEC_E_KDC_INVALID_REQUEST                 = (0x80090340, "An invalid request was sent to the KDC."),
        SEC_E_KDC_UNABLE_TO_REFER                 = (0x80090341, "The KDC was unable to generate a referral for the service requested."),
        SEC_E_KDC_UNKNOWN_ETYPE                   = (0x80090342, "The encryption type requested is not supported by the KDC."),
        SEC_E_UNSUPPORTED_PREAUTH                 = (0x80090343, "An unsupported pre-authentication mechanism was presented to the Kerberos package."),
        SEC_E_DELEGATION_REQUIRED                 = (0x80090345, "The requested operation cannot be completed. The computer must be trusted for delegation, and the current user account must be configured to allow delegation."),
        SEC_E_BAD_BINDINGS                        = (0x80090346, "Client's supplied Security Support Provider Interface (SSPI) channel bindings were incorrect."),
        SEC_E_MULTIPLE_ACCOUNTS                   = (0x80090347, "The received certificate was mapped to multiple accounts."),
        SEC_E_NO_KERB_KEY                         = (0x80090348, "No Kerberos key was found."),
        SEC_E_CERT_WRONG_USAGE                    = (0x80090349, "The certificate is not valid for the requested usage."),
        SEC_E_DOWNGRADE_DETECTED                  = (0x80090350, "The system detected a possible attempt to compromise security. Ensure that you can contact the server that authenticated you."),
        SEC_E_SMARTCARD_CERT_REVOKED              = (0x80090351, "The smart card certificate used for authentication has been revoked. Contact your system administrator. The event log might contain additional information."),
        SEC_E_ISSUING_CA_UNTRUSTED                = (0x80090352, "An untrusted certification authority (CA) was detected while processing the smart card certificate used for authentication. Contact your system administrator."),
        SEC_E_REVOCATION_OFFLINE_C                = (0x80090353, "The revocation status of the smart card certificate used for authentication could not be determined. Contact your system administrator."),
        SEC_E_PKINIT_CLIENT_FAILURE               = (0x80090354, "The smart card certificate used for authentication was not trusted. Contact your system administrator."),
        SEC_E_SMARTCARD_CERT_EXPIRED              = (0x80090355, "The smart card certificate used for authentication has expired. Contact your system administrator."),
        SEC_E_NO_S4U_PROT_SUPPORT                 = (0x80090356, "The Kerberos subsystem encountered an error. A service for user protocol requests was made against a domain controller that does not support services for users."),
        SEC_E_CROSSREALM_DELEGATION_FAILURE       = (0x80090357, "An attempt was made by this server to make a Kerberos-constrained delegation request for a target outside the server's realm. This is not supported and indicates a misconfiguration on this server's allowed-to-delegate-to list. Contact your administrator."),
        SEC_E_REVOCATION_OFFLINE_KDC              = (0x80090358, "The revocation status of the domain controller certificate used for smart card authentication could not be determined. The system event log contains additional information. Contact your system administrator."),
        SEC_E_ISSUING_CA_UNTRUSTED_KDC            = (0x80090359, "An untrusted CA was detected while processing the domain controller certificate used for authentication. The system event log contains additional information. Contact your system administrator."),
        SEC_E_KDC_CERT_EXPIRED                    = (0x8009035A, "The domain controller certificate used for smart card logon has expired. Contact your system administrator with the contents of your system event log."),
        SEC_E_KDC_CERT_REVOKED                    = (0x8009035B, "The domain controller certificate used for smart card logon has been revoked. Contact your system administrator with the contents of your system event log."),
        SEC_E_INVALID_PARAMETER                   = (0x8009035D, "One or more of the parameters passed to the function were invalid."),
        SEC_E_DELEGATION_POLICY                   = (0x8009035E, "The client policy does not allow credential delegation to the target server."),
        SEC_E_POLICY_NLTM_ONLY                    = (0x8009035F, "The client policy does not allow credential delegation to the target server with NLTM only authentication."),
        SEC_E_NO_CONTEXT                          = (0x80090361, "The requested security context does not exist."),
        SEC_E_PKU2U_CERT_FAILURE                  = (0x80090362, "The PKU2U protocol encountered an error while attempting to utilize the associated certificates."),
        SEC_E_MUTUAL_AUTH_FAILED                  = (0x80090363, "The identity of the server computer could not be verified."),
        CRYPT_E_MSG_ERROR                         = (0x80091001, "An error occurred while performing an operation on a cryptographic message."),
        CRYPT_E_UNKNOWN_ALGO                      = (0x80091002, "Unknown cryptographic algorithm."),
        CRYPT_E_OID_FORMAT                        = (0x80091003, "The object identifier is poorly formatted."),
        CRYPT_E_INVALID_MSG_TYPE                  = (0x80091004, "Invalid cryptographic message type."),
        CRYPT_E_UNEXPECTED_ENCODING               = (0x80091005, "Unexpected cryptographic message encoding."),
        CRYPT_E_AUTH_ATTR_MISSING                 = (0x80091006, "The cryptographic message does not contain an expected authenticated attribute."),
        CRYPT_E_HASH_VALUE                        = (0x80091007, "The hash value is not correct."),
        CRYPT_E_INVALID_INDEX                     = (0x80091008, "The index value is not valid."),
        CRYPT_E_ALREADY_DECRYPTED                 = (0x80091009, "The content of the cryptographic message has already been decrypted."),
        CRYPT_E_NOT_DECRYPTED                     = (0x8009100A, "The content of the cryptographic message has not been decrypted yet."),
        CRYPT_E_RECIPIENT_NOT_FOUND               = (0x8009100B, "The enveloped-data message does not contain the specified recipient."),
        CRYPT_E_CONTROL_TYPE                      = (0x8009100C, "Invalid control type."),
        CRYPT_E_ISSUER_SERIALNUMBER               = (0x8009100D, "Invalid issuer or serial number."),
        CRYPT_E_SIGNER_NOT_FOUND                  = (0x8009100E, "Cannot find the original signer."),
        CRYPT_E_ATTRIBUTES_MISSING                = (0x8009100F, "The cryptographic message does not contain all of the requested attributes."),
        CRYPT_E_STREAM_MSG_NOT_READY              = (0x80091010, "The streamed cryptographic message is not ready to return data."),
        CRYPT_E_STREAM_INSUFFICIENT_DATA          = (0x80091011, "The streamed cryptographic message requires more data to complete the decode operation."),
        CRYPT_E_BAD_LEN                           = (0x80092001, "The length specified for the output data was insufficient."),
        CRYPT_E_BAD_ENCODE                        = (0x80092002, "An error occurred during the encode or decode operation."),
        CRYPT_E_FILE_ERROR                        = (0x80092003, "An error occurred while reading or writing to a file."),
        CRYPT_E_NOT_FOUND                         = (0x80092004, "Cannot find object or property."),
        CRYPT_E_EXISTS                            = (0x80092005, "The object or property already exists."),
        CRYPT_E_NO_PROVIDER                       = (0x80092006, "No provider was specified for the store or object."),
        CRYPT_E_SELF_SIGNED                       = (0x80092007, "The specified certificate is self-signed."),
        CRYPT_E_DELETED_PREV                      = (0x80092008, "The previous certificate or certificate revocation list (CRL) context was deleted."),
        CRYPT_E_NO_MATCH                          = (0x80092009, "Cannot find the requested object."),
        CRYPT_E_UNEXPECTED_MSG_TYPE               = (0x8009200A, "The type of the cryptographic message being decoded is different than what was expected."),
        CRYPT_E_NO_KEY_PROPERTY                   = (0x8009200B, "The certificate does not have a property that references a private key."),
        CRYPT_E_NO_DECRYPT_CERT                   = (0x8009200C, "Cannot find the certificate and private key to use for decryption."),
        CRYPT_E_BAD_MSG                           = (0x8009200D, "Not a cryptographic message or the cryptographic message is not formatted correctly."),
        CRYPT_E_NO_SIGNER                         = (0x8009200E, "The signed cryptographic message does not have a signer for the specified signer index."),
        CRYPT_E_PENDING_CLOSE                     = (0x8009200F, "Final closure is pending until additional frees or closes."),
        CRYPT_E_REVOKED                           = (0x80092010, "The certificate is revoked."),
        CRYPT_E_NO_REVOCATION_DLL                 = (0x80092011, "No DLL or exported function was found to verify revocation."),
        CRYPT_E_NO_REVOCATION_CHECK               = (0x80092012, "The revocation function was unable to check revocation for the certificate."),
        CRYPT_E_REVOCATION_OFFLINE                = (0x80092013, "The revocation function was unable to check revocation because the revocation server was offline."),
        CRYPT_E_NOT_IN_REVOCATION_DATABASE        = (0x80092014, "The certificate is not in the revocation server's database."),
        CRYPT_E_INVALID_NUMERIC_STRING            = (0x80092020, "The string contains a non-numeric character."),
        CRYPT_E_INVALID_PRINTABLE_STRING          = (0x80092021, "The string contains a nonprintable character."),
        CRYPT_E_INVALID_IA5_STRING                = (0x80092022, "The string contains a character not in the 7-bit ASCII character set."),
        CRYPT_E_INVALID_X500_STRING               = (0x80092023, "The string contains an invalid X500 name attribute key, object identifier (OID), value, or delimiter."),
        CRYPT_E_NOT_CHAR_STRING                   = (0x80092024, "The dwValueType for the CERT_NAME_VALUE is not one of the character strings. Most likely it is either a CERT_RDN_ENCODED_BLOB or CERT_RDN_OCTET_STRING."),
        CRYPT_E_FILERESIZED                       = (0x80092025, "The Put operation cannot continue. The file needs to be resized. However, there is already a signature present. A complete signing operation must be done."),
        CRYPT_E_SECURITY_SETTINGS                 = (0x80092026, "The cryptographic operation failed due to a local security option setting."),
        CRYPT_E_NO_VERIFY_USAGE_DLL               = (0x80092027, "No DLL or exported function was found to verify subject usage."),
        CRYPT_E_NO_VERIFY_USAGE_CHECK             = (0x80092028, "The called function was unable to perform a usage check on the subject."),
        CRYPT_E_VERIFY_USAGE_OFFLINE              = (0x80092029, "The called function was unable to complete the usage check because the server was offline."),
        CRYPT_E_NOT_IN_CTL                        = (0x8009202A, "The subject was not found in a certificate trust list (CTL)."),
        CRYPT_E_NO_TRUSTED_SIGNER                 = (0x8009202B, "None of the signers of the cryptographic message or certificate trust list is trusted."),
        CRYPT_E_MISSING_PUBKEY_PARA               = (0x8009202C, "The public key's algorithm parameters are missing."),
        CRYPT_E_OBJECT_LOCATOR_OBJECT_NOT_FOUND   = (0x8009202D, "An object could not be located using the object locator infrastructure with the given name."),
        OSS_MORE_BUF                              = (0x80093000, "OSS Certificate encode/decode error code base."),
        OSS_NEGATIVE_UINTEGER                     = (0x80093001, "OSS ASN.1 Error: Unexpected end of data."),
        OSS_PDU_RANGE                             = (0x80093002, "OSS ASN.1 Error: Unknown PDU ID."),
        OSS_MORE_INPUT                            = (0x80093003, "OSS ASN.1 Error: Unexpected end of data."),
        OSS_DATA_ERROR                            = (0x80093004, "OSS ASN.1 Error: Invalid data."),
        OSS_BAD_ARG                               = (0x80093005, "OSS ASN.1 Error: Invalid argument."),
        OSS_BAD_VERSION                           = (0x80093006, "OSS ASN.1 Error: Encode/Decode version mismatch."),
        OSS_OUT_MEMORY                            = (0x80093007, "OSS ASN.1 Error: Out of memory."),
        OSS_PDU_MISMATCH                          = (0x80093008, "OSS ASN.1 Error: Encode/Decode error."),
        OSS_LIMITED                               = (0x80093009, "OSS ASN.1 Error: Internal error."),
        OSS_BAD_PTR                               = (0x8009300A, "OSS ASN.1 Error: Invalid data."),
        OSS_BAD_TIME                              = (0x8009300B, "OSS ASN.1 Error: Invalid data."),
        OSS_INDEFINITE_NOT_SUPPORTED              = (0x8009300C, "OSS ASN.1 Error: Unsupported BER indefinite-length encoding."),
        OSS_MEM_ERROR                             = (0x8009300D, "OSS ASN.1 Error: Access violation."),
        OSS_BAD_TABLE                             = (0x8009300E, "OSS ASN.1 Error: Invalid data."),
        OSS_TOO_LONG                              = (0x8009300F, "OSS ASN.1 Error: Invalid data."),
        OSS_CONSTRAINT_VIOLATED                   = (0x80093010, "OSS ASN.1 Error: Invalid data."),
        OSS_FATAL_ERROR                           = (0x80093011, "OSS ASN.1 Error: Internal error."),
        OSS_ACCESS_SERIALIZATION_ERROR            = (0x80093012, "OSS ASN.1 Error: Multithreading conflict."),
        OSS_NULL_TBL                              = (0x80093013, "OSS ASN.1 Error: Invalid data."),
        OSS_NULL_FCN                              = (0x80093014, "OSS ASN.1 Error: Invalid data."),
        OSS_BAD_ENCRULES                          = (0x80093015, "OSS ASN.1 Error: Invalid data."),
        OSS_UNAVAIL_ENCRULES                      = (0x80093016, "OSS ASN.1 Error: Encode/Decode function not implemented."),
        OSS_CANT_OPEN_TRACE_WINDOW                = (0x80093017, "OSS ASN.1 Error: Trace file error."),
        OSS_UNIMPLEMENTED                         = (0x80093018, "OSS ASN.1 Error: Function not implemented."),
        OSS_OID_DLL_NOT_LINKED                    = (0x80093019, "OSS ASN.1 Error: Program link error."),
        OSS_CANT_OPEN_TRACE_FILE                  = (0x8009301A, "OSS ASN.1 Error: Trace file error."),
        OSS_TRACE_FILE_ALREADY_OPEN               = (0x8009301B, "OSS ASN.1 Error: Trace file error."),
        OSS_TABLE_MISMATCH                        = (0x8009301C, "OSS ASN.1 Error: Invalid data."),
        OSS_TYPE_NOT_SUPPORTED                    = (0x8009301D, "OSS ASN.1 Error: Invalid data."),
        OSS_REAL_DLL_NOT_LINKED                   = (0x8009301E, "OSS ASN.1 Error: Program link error."),
        OSS_REAL_CODE_NOT_LINKED                  = (0x8009301F, "OSS ASN.1 Error: Program link error."),
        OSS_OUT_OF_RANGE                          = (0x80093020, "OSS ASN.1 Error: Program link error."),
        OSS_COPIER_DLL_NOT_LINKED                 = (0x80093021, "OSS ASN.1 Error: Program link error."),
        OSS_CONSTRAINT_DLL_NOT_LINKED             = (0x80093022, "OSS ASN.1 Error: Program link error."),
        OSS_COMPARATOR_DLL_NOT_LINKED             = (0x80093023, "OSS ASN.1 Error: Program link error."),
        OSS_COMPARATOR_CODE_NOT_LINKED            = (0x80093024, "OSS ASN.1 Error: Program link error."),
        OSS_MEM_MGR_DLL_NOT_LINKED                = (0x80093025, "OSS ASN.1 Error: Program link error."),
        OSS_PDV_DLL_NOT_LINKED                    = (0x80093026, "OSS ASN.1 Error: Program link error."),
        OSS_PDV_CODE_NOT_LINKED                   = (0x80093027, "OSS ASN.1 Error: Program link error."),
        OSS_API_DLL_NOT_LINKED                    = (0x80093028, "OSS ASN.1 Error: Program link error."),
        OSS_BERDER_DLL_NOT_LINKED                 = (0x80093029, "OSS ASN.1 Error: Program link error."),
        OSS_PER_DLL_NOT_LINKED                    = (0x8009302A, "OSS ASN.1 Error: Program link error."),
        OSS_OPEN_TYPE_ERROR                       = (0x8009302B, "OSS ASN.1 Error: Program link error."),
        OSS_MUTEX_NOT_CREATED                     = (0x8009302C, "OSS ASN.1 Error: System resource error."),
        OSS_CANT_CLOSE_TRACE_FILE                 = (0x8009302D, "OSS ASN.1 Error: Trace file error."),
        CRYPT_E_ASN1_ERROR                        = (0x80093100, "ASN1 Certificate encode/decode error code base."),
        CRYPT_E_ASN1_INTERNAL                     = (0x80093101, "ASN1 internal encode or decode error."),
        CRYPT_E_ASN1_EOD                          = (0x80093102, "ASN1 unexpected end of data."),
        CRYPT_E_ASN1_CORRUPT                      = (0x80093103, "ASN1 corrupted data."),
        CRYPT_E_ASN1_LARGE                        = (0x80093104, "ASN1 value too large."),
        CRYPT_E_ASN1_CONSTRAINT                   = (0x80093105, "ASN1 constraint violated."),
        CRYPT_E_ASN1_MEMORY                       = (0x80093106, "ASN1 out of memory."),
        CRYPT_E_ASN1_OVERFLOW                     = (0x80093107, "ASN1 buffer overflow."),
        CRYPT_E_ASN1_BADPDU                       = (0x80093108, "ASN1 function not supported for this protocol data unit (PDU)."),
        CRYPT_E_ASN1_BADARGS                      = (0x80093109, "ASN1 bad arguments to function call."),
        CRYPT_E_ASN1_BADREAL                      = (0x8009310A, "ASN1 bad real value."),
        CRYPT_E_ASN1_BADTAG                       = (0x8009310B, "ASN1 bad tag value met."),
        CRYPT_E_ASN1_CHOICE                       = (0x8009310C, "ASN1 bad choice value."),
        CRYPT_E_ASN1_RULE                         = (0x8009310D, "ASN1 bad encoding rule."),
        CRYPT_E_ASN1_UTF8                         = (0x8009310E, "ASN1 bad Unicode (UTF8)."),
        CRYPT_E_ASN1_PDU_TYPE                     = (0x80093133, "ASN1 bad PDU type."),
        CRYPT_E_ASN1_NYI                          = (0x80093134, "ASN1 not yet implemented."),
        CRYPT_E_ASN1_EXTENDED                     = (0x80093201, "ASN1 skipped unknown extensions."),
        CRYPT_E_ASN1_NOEOD                        = (0x80093202, "ASN1 end of data expected."),
        CERTSRV_E_BAD_REQUESTSUBJECT              = (0x80094001, "The request subject name is invalid or too long."),
        CERTSRV_E_NO_REQUEST                      = (0x80094002, "The request does not exist."),
        CERTSRV_E_BAD_REQUESTSTATUS               = (0x80094003, "The request's current status does not allow this operation."),
        CERTSRV_E_PROPERTY_EMPTY                  = (0x80094004, "The requested property value is empty."),
        CERTSRV_E_INVALID_CA_CERTIFICATE          = (0x80094005, "The CA's certificate contains invalid data."),
        CERTSRV_E_SERVER_SUSPENDED                = (0x80094006, "Certificate service has been suspended for a database restore operation."),
        CERTSRV_E_ENCODING_LENGTH                 = (0x80094007, "The certificate contains an encoded length that is potentially incompatible with older enrollment software."),
        CERTSRV_E_ROLECONFLICT                    = (0x80094008, "The operation is denied. The user has multiple roles assigned, and the CA is configured to enforce role separation."),
        CERTSRV_E_RESTRICTEDOFFICER               = (0x80094009, "The operation is denied. It can only be performed by a certificate manager that is allowed to manage certificates for the current requester."),
        CERTSRV_E_KEY_ARCHIVAL_NOT_CONFIGURED     = (0x8009400A, "Cannot archive private key. The CA is not configured for key archival."),
        CERTSRV_E_NO_VALID_KRA                    = (0x8009400B, "Cannot archive private key. The CA could not verify one or more key recovery certificates."),
        CERTSRV_E_BAD_REQUEST_KEY_ARCHIVAL        = (0x8009400C, "The request is incorrectly formatted. The encrypted private key must be in an unauthenticated attribute in an outermost signature."),
        CERTSRV_E_NO_CAADMIN_DEFINED              = (0x8009400D, "At least one security principal must have the permission to manage this CA."),
        CERTSRV_E_BAD_RENEWAL_CERT_ATTRIBUTE      = (0x8009400E, "The request contains an invalid renewal certificate attribute."),
        CERTSRV_E_NO_DB_SESSIONS                  = (0x8009400F, "An attempt was made to open a CA database session, but there are already too many active sessions. The server needs to be configured to allow additional sessions."),
        CERTSRV_E_ALIGNMENT_FAULT                 = (0x80094010, "A memory reference caused a data alignment fault."),
        CERTSRV_E_ENROLL_DENIED                   = (0x80094011, "The permissions on this CA do not allow the current user to enroll for certificates."),
        CERTSRV_E_TEMPLATE_DENIED                 = (0x80094012, "The permissions on the certificate template do not allow the current user to enroll for this type of certificate."),
        CERTSRV_E_DOWNLEVEL_DC_SSL_OR_UPGRADE     = (0x80094013, "The contacted domain controller cannot support signed Lightweight Directory Access Protocol (LDAP) traffic. Update the domain controller or configure Certificate Services to use SSL for Active Directory access."),
        CERTSRV_E_UNSUPPORTED_CERT_TYPE           = (0x80094800, "The requested certificate template is not supported by this CA."),
        CERTSRV_E_NO_CERT_TYPE                    = (0x80094801, "The request contains no certificate template information."),
        CERTSRV_E_TEMPLATE_CONFLICT               = (0x80094802, "The request contains conflicting template information."),
        CERTSRV_E_SUBJECT_ALT_NAME_REQUIRED       = (0x80094803, "The request is missing a required Subject Alternate name extension."),
        CERTSRV_E_ARCHIVED_KEY_REQUIRED           = (0x80094804, "The request is missing a required private key for archival by the server."),
        CERTSRV_E_SMIME_REQUIRED                  = (0x80094805, "The request is missing a required SMIME capabilities extension."),
        CERTSRV_E_BAD_RENEWAL_SUBJECT             = (0x80094806, "The request was made on behalf of a subject other than the caller. The certificate template must be configured to require at least one signature to authorize the request."),
        CERTSRV_E_BAD_TEMPLATE_VERSION            = (0x80094807, "The request template version is newer than the supported template version."),
        CERTSRV_E_TEMPLATE_POLICY_REQUIRED        = (0x80094808, "The template is missing a required signature policy attribute."),
        CERTSRV_E_SIGNATURE_POLICY_REQUIRED       = (0x80094809, "The request is missing required signature policy information."),
        CERTSRV_E_SIGNATURE_COUNT                 = (0x8009480A, "The request is missing one or more required signatures."),
        CERTSRV_E_SIGNATURE_REJECTED              = (0x8009480B, "One or more signatures did not include the required application or issuance policies. The request is missing one or more required valid signatures."),
        CERTSRV_E_ISSUANCE_POLICY_REQUIRED        = (0x8009480C, "The request is missing one or more required signature issuance policies."),
        CERTSRV_E_SUBJECT_UPN_REQUIRED            = (0x8009480D, "The UPN is unavailable and cannot be added to the Subject Alternate name."),
        CERTSRV_E_SUBJECT_DIRECTORY_GUID_REQUIRED = (0x8009480E, "The Active Directory GUID is unavailable and cannot be added to the Subject Alternate name."),
        CERTSRV_E_SUBJECT_DNS_REQUIRED            = (0x8009480F, "The Domain Name System (DNS) name is unavailable and cannot be added to the Subject Alternate name."),
        CERTSRV_E_ARCHIVED_KEY_UNEXPECTED         = (0x80094810, "The request includes a private key for archival by the server, but key archival is not enabled for the specified certificate template."),
        CERTSRV_E_KEY_LENGTH                      = (0x80094811, "The public key does not meet the minimum size required by the specified certificate template."),
        CERTSRV_E_SUBJECT_EMAIL_REQUIRED          = (0x80094812, "The email name is unavailable and cannot be added to the Subject or Subject Alternate name."),
        CERTSRV_E_UNKNOWN_CERT_TYPE               = (0x80094813, "One or more certificate templates to be enabled on this CA could not be found."),
        CERTSRV_E_CERT_TYPE_OVERLAP               = (0x80094814, "The certificate template renewal period is longer than the certificate validity period. The template should be reconfigured or the CA certificate renewed."),
        CERTSRV_E_TOO_MANY_SIGNATURES             = (0x80094815, "The certificate template requires too many return authorization (RA) signatures. Only one RA signature is allowed."),
        CERTSRV_E_RENEWAL_BAD_PUBLIC_KEY          = (0x80094816, "The key used in a renewal request does not match one of the certificates being renewed."),
        CERTSRV_E_INVALID_EK                      = (0x80094817, "The endorsement key certificate is not valid."),
        CERTSRV_E_KEY_ATTESTATION                 = (0x8009481A, "Key attestation did not succeed."),
        XENROLL_E_KEY_NOT_EXPORTABLE              = (0x80095000, "The key is not exportable."),
        XENROLL_E_CANNOT_ADD_ROOT_CERT            = (0x80095001, "You cannot add the root CA certificate into your local store."),
        XENROLL_E_RESPONSE_KA_HASH_NOT_FOUND      = (0x80095002, "The key archival hash attribute was not found in the response."),
        XENROLL_E_RESPONSE_UNEXPECTED_KA_HASH     = (0x80095003, "An unexpected key archival hash attribute was found in the response."),
        XENROLL_E_RESPONSE_KA_HASH_MISMATCH       = (0x80095004, "There is a key archival hash mismatch between the request and the response."),
        XENROLL_E_KEYSPEC_SMIME_MISMATCH          = (0x80095005, "Signing certificate cannot include SMIME extension."),
        TRUST_E_SYSTEM_ERROR                      = (0x80096001, "A system-level error occurred while verifying trust."),
        TRUST_E_NO_SIGNER_CERT                    = (0x80096002, "The certificate for the signer of the message is invalid or not found."),
        TRUST_E_COUNTER_SIGNER                    = (0x80096003, "One of the counter signatures was invalid."),
        TRUST_E_CERT_SIGNATURE                    = (0x80096004, "The signature of the certificate cannot be verified."),
        TRUST_E_TIME_STAMP                        = (0x80096005, "The time-stamp signature or certificate could not be verified or is malformed."),
        TRUST_E_BAD_DIGEST                        = (0x80096010, "The digital signature of the object did not verify."),
        TRUST_E_BASIC_CONSTRAINTS                 = (0x80096019, "A certificate's basic constraint extension has not been observed."),
        TRUST_E_FINANCIAL_CRITERIA                = (0x8009601E, "The certificate does not meet or contain the Authenticode financial extensions."),
        MSSIPOTF_E_OUTOFMEMRANGE                  = (0x80097001, "Tried to reference a part of the file outside the proper range."),
        MSSIPOTF_E_CANTGETOBJECT                  = (0x80097002, "Could not retrieve an object from the file."),
        MSSIPOTF_E_NOHEADTABLE                    = (0x80097003, "Could not find the head table in the file."),
        MSSIPOTF_E_BAD_MAGICNUMBER                = (0x80097004, "The magic number in the head table is incorrect."),
        MSSIPOTF_E_BAD_OFFSET_TABLE               = (0x80097005, "The offset table has incorrect values."),
        MSSIPOTF_E_TABLE_TAGORDER                 = (0x80097006, "Duplicate table tags or the tags are out of alphabetical order."),
        MSSIPOTF_E_TABLE_LONGWORD                 = (0x80097007, "A table does not start on a long word boundary."),
        MSSIPOTF_E_BAD_FIRST_TABLE_PLACEMENT      = (0x80097008, "First table does not appear after header information."),
        MSSIPOTF_E_TABLES_OVERLAP                 = (0x80097009, "Two or more tables overlap."),
        MSSIPOTF_E_TABLE_PADBYTES                 = (0x8009700A, "Too many pad bytes between tables, or pad bytes are not 0."),
        MSSIPOTF_E_FILETOOSMALL                   = (0x8009700B, "File is too small to contain the last table."),
        MSSIPOTF_E_TABLE_CHECKSUM                 = (0x8009700C, "A table checksum is incorrect."),
        MSSIPOTF_E_FILE_CHECKSUM                  = (0x8009700D, "The file checksum is incorrect."),
        MSSIPOTF_E_FAILED_POLICY                  = (0x80097010, "The signature does not have the correct attributes for the policy."),
        MSSIPOTF_E_FAILED_HINTS_CHECK             = (0x80097011, "The file did not pass the hints check."),
        MSSIPOTF_E_NOT_OPENTYPE                   = (0x80097012, "The file is not an OpenType file."),
        MSSIPOTF_E_FILE                           = (0x80097013, "Failed on a file operation (such as open, map, read, or write)."),
        MSSIPOTF_E_CRYPT                          = (0x80097014, "A call to a CryptoAPI function failed."),
        MSSIPOTF_E_BADVERSION                     = (0x80097015, "There is a bad version number in the file."),
        MSSIPOTF_E_DSIG_STRUCTURE                 = (0x80097016, "The structure of the DSIG table is incorrect."),
        MSSIPOTF_E_PCONST_CHECK                   = (0x80097017, "A check failed in a partially constant table."),
        MSSIPOTF_E_STRUCTURE                      = (0x80097018, "Some kind of structural error."),
        ERROR_CRED_REQUIRES_CONFIRMATION          = (0x80097019, "The requested credential requires confirmation."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_CERT (11) - Certificate trust verification
    // -------------------------------------------------------------------------
    Facility::Cert => {
        TRUST_E_PROVIDER_UNKNOWN     = (0x800B0001, "Unknown trust provider."),
        TRUST_E_ACTION_UNKNOWN       = (0x800B0002, "The trust verification action specified is not supported by the specified trust provider."),
        TRUST_E_SUBJECT_FORM_UNKNOWN = (0x800B0003, "The form specified for the subject is not one supported or known by the specified trust provider."),
        TRUST_E_SUBJECT_NOT_TRUSTED  = (0x800B0004, "The subject is not trusted for the specified action."),
        DIGSIG_E_ENCODE              = (0x800B0005, "Error due to problem in ASN.1 encoding process."),
        DIGSIG_E_DECODE              = (0x800B0006, "Error due to problem in ASN.1 decoding process."),
        DIGSIG_E_EXTENSIBILITY       = (0x800B0007, "Reading / writing extensions where attributes are appropriate, and vice versa."),
        DIGSIG_E_CRYPTO              = (0x800B0008, "Unspecified cryptographic failure."),
        PERSIST_E_SIZEDEFINITE       = (0x800B0009, "The size of the data could not be determined."),
        PERSIST_E_SIZEINDEFINITE     = (0x800B000A, "The size of the indefinite-sized data could not be determined."),
        PERSIST_E_NOTSELFSIZING      = (0x800B000B, "This object does not read and write self-sizing data."),
        TRUST_E_NOSIGNATURE          = (0x800B0100, "No signature was present in the subject."),
        CERT_E_EXPIRED               = (0x800B0101, "A required certificate is not within its validity period when verifying against the current system clock or the time stamp in the signed file."),
        CERT_E_VALIDITYPERIODNESTING = (0x800B0102, "The validity periods of the certification chain do not nest correctly."),
        CERT_E_ROLE                  = (0x800B0103, "A certificate that can only be used as an end entity is being used as a CA or vice versa."),
        CERT_E_PATHLENCONST          = (0x800B0104, "A path length constraint in the certification chain has been violated."),
        CERT_E_CRITICAL              = (0x800B0105, "A certificate contains an unknown extension that is marked critical."),
        CERT_E_PURPOSE               = (0x800B0106, "A certificate is being used for a purpose other than the ones specified by its CA."),
        CERT_E_ISSUERCHAINING        = (0x800B0107, "A parent of a given certificate did not issue that child certificate."),
        CERT_E_MALFORMED             = (0x800B0108, "A certificate is missing or has an empty value for an important field, such as a subject or issuer name."),
        CERT_E_UNTRUSTEDROOT         = (0x800B0109, "A certificate chain processed, but terminated in a root certificate that is not trusted by the trust provider."),
        CERT_E_CHAINING              = (0x800B010A, "A certificate chain could not be built to a trusted root authority."),
        TRUST_E_FAIL                 = (0x800B010B, "Generic trust failure."),
        CERT_E_REVOKED               = (0x800B010C, "A certificate was explicitly revoked by its issuer."),
        CERT_E_UNTRUSTEDTESTROOT     = (0x800B010D, "The certification path terminates with the test root that is not trusted with the current policy settings."),
        CERT_E_CN_NO_MATCH           = (0x800B010F, "The certificate's CN name does not match the passed value."),
        CERT_E_WRONG_USAGE           = (0x800B0110, "The certificate is not valid for the requested usage."),
        TRUST_E_EXPLICIT_DISTRUST    = (0x800B0111, "The certificate was explicitly marked as untrusted by the user."),
        CERT_E_UNTRUSTEDCA           = (0x800B0112, "A certification chain processed correctly, but one of the CA certificates is not trusted by the policy provider."),
        CERT_E_INVALID_POLICY        = (0x800B0113, "The certificate has invalid policy."),
        CERT_E_INVALID_NAME          = (0x800B0114, "The certificate has an invalid name. The name is not included in the permitted list or is explicitly excluded."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_INTERNET (12) - URL monikers and Internet transfers
    // -------------------------------------------------------------------------
    Facility::Internet => {
        INET_E_INVALID_URL                         = (0x800C0002, "The URL is invalid."),
        INET_E_NO_SESSION                          = (0x800C0003, "No Internet session has been established."),
        INET_E_CANNOT_CONNECT                      = (0x800C0004, "Unable to connect to the target server."),
        INET_E_RESOURCE_NOT_FOUND                  = (0x800C0005, "The system cannot locate the resource specified."),
        INET_E_OBJECT_NOT_FOUND                    = (0x800C0006, "The system cannot locate the object specified."),
        INET_E_DATA_NOT_AVAILABLE                  = (0x800C0007, "No data is available for the requested resource."),
        INET_E_DOWNLOAD_FAILURE                    = (0x800C0008, "The download of the specified resource has failed."),
        INET_E_AUTHENTICATION_REQUIRED             = (0x800C0009, "Authentication is required to access this resource."),
        INET_E_NO_VALID_MEDIA                      = (0x800C000A, "The server could not recognize the provided mime type."),
        INET_E_CONNECTION_TIMEOUT                  = (0x800C000B, "The operation was timed out."),
        INET_E_INVALID_REQUEST                     = (0x800C000C, "The server did not understand the request, or the request was invalid."),
        INET_E_UNKNOWN_PROTOCOL                    = (0x800C000D, "The specified protocol is unknown."),
        INET_E_SECURITY_PROBLEM                    = (0x800C000E, "A security problem occurred."),
        INET_E_CANNOT_LOAD_DATA                    = (0x800C000F, "The system could not load the persisted data."),
        INET_E_CANNOT_INSTANTIATE_OBJECT           = (0x800C0010, "Unable to instantiate the object."),
        INET_E_USE_DEFAULT_PROTOCOLHANDLER         = (0x800C0011, "Use the default protocol handler."),
        INET_E_USE_DEFAULT_SETTING                 = (0x800C0012, "Use the default settings."),
        INET_E_QUERYOPTION_UNKNOWN                 = (0x800C0013, "The requested option is unknown."),
        INET_E_REDIRECT_FAILED                     = (0x800C0014, "A redirection problem occurred."),
        INET_E_REDIRECT_TO_DIR                     = (0x800C0015, "The requested resource is a directory, not a file."),
        INET_E_CANNOT_LOCK_REQUEST                 = (0x800C0016, "The requested resource could not be locked."),
        INET_E_USE_EXTEND_BINDING                  = (0x800C0017, "Reissue request with extended binding."),
        INET_E_TERMINATED_BIND                     = (0x800C0018, "Binding was terminated."),
        INET_E_INVALID_CERTIFICATE                 = (0x800C0019, "Security certificate required to access this resource is invalid."),
        INET_E_BLOCKED_REDIRECT_XSECURITYID        = (0x800C001B, "The redirect request was blocked because SID of the source URL does not match the SID of the target URL."),
        INET_E_CODE_DOWNLOAD_FAILURE               = (0x800C0100, "Component download failed."),
        INET_E_RESULT_DISPATCHED                   = (0x800C0200, "The binding has already been completed and the result has been dispatched, so your abort call has been canceled."),
        INET_E_CANNOT_REPLACE_SFP_FILE             = (0x800C0300, "Cannot replace a file that is protected by System File Protection."),
        INET_E_CODE_INSTALL_SUPPRESSED             = (0x800C0400, "The code install is suppressed."),
        INET_E_CODE_INSTALL_BLOCKED_BY_HASH_POLICY = (0x800C0500, "Code Install Blocked by Hash Policy."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_SETUPAPI (15) - Device installation
    // -------------------------------------------------------------------------
    Facility::SetupApi => {
        SPAPI_E_EXPECTED_SECTION_NAME              = (0x800F0000, "A non-empty line was encountered in the INF before the start of a section."),
        SPAPI_E_BAD_SECTION_NAME_LINE              = (0x800F0001, "A section name marker in the information file (INF) is not complete or does not exist on a line by itself."),
        SPAPI_E_SECTION_NAME_TOO_LONG              = (0x800F0002, "An INF section was encountered whose name exceeds the maximum section name length."),
        SPAPI_E_GENERAL_SYNTAX                     = (0x800F0003, "The syntax of the INF is invalid."),
        SPAPI_E_WRONG_INF_STYLE                    = (0x800F0100, "The style of the INF is different than what was requested."),
        SPAPI_E_SECTION_NOT_FOUND                  = (0x800F0101, "The required section was not found in the INF."),
        SPAPI_E_LINE_NOT_FOUND                     = (0x800F0102, "The required line was not found in the INF."),
        SPAPI_E_NO_BACKUP                          = (0x800F0103, "The files affected by the installation of this file queue have not been backed up for uninstall."),
        SPAPI_E_NO_ASSOCIATED_CLASS                = (0x800F0200, "The INF or the device information set or element does not have an associated install class."),
        SPAPI_E_CLASS_MISMATCH                     = (0x800F0201, "The INF or the device information set or element does not match the specified install class."),
        SPAPI_E_DUPLICATE_FOUND                    = (0x800F0202, "An existing device was found that is a duplicate of the device being manually installed."),
        SPAPI_E_NO_DRIVER_SELECTED                 = (0x800F0203, "There is no driver selected for the device information set or element."),
        SPAPI_E_KEY_DOES_NOT_EXIST                 = (0x800F0204, "The requested device registry key does not exist."),
        SPAPI_E_INVALID_DEVINST_NAME               = (0x800F0205, "The device instance name is invalid."),
        SPAPI_E_INVALID_CLASS                      = (0x800F0206, "The install class is not present or is invalid."),
        SPAPI_E_DEVINST_ALREADY_EXISTS             = (0x800F0207, "The device instance cannot be created because it already exists."),
        SPAPI_E_DEVINFO_NOT_REGISTERED             = (0x800F0208, "The operation cannot be performed on a device information element that has not been registered."),
        SPAPI_E_INVALID_REG_PROPERTY               = (0x800F0209, "The device property code is invalid."),
        SPAPI_E_NO_INF                             = (0x800F020A, "The INF from which a driver list is to be built does not exist."),
        SPAPI_E_NO_SUCH_DEVINST                    = (0x800F020B, "The device instance does not exist in the hardware tree."),
        SPAPI_E_CANT_LOAD_CLASS_ICON               = (0x800F020C, "The icon representing this install class cannot be loaded."),
        SPAPI_E_INVALID_CLASS_INSTALLER            = (0x800F020D, "The class installer registry entry is invalid."),
        SPAPI_E_DI_DO_DEFAULT                      = (0x800F020E, "The class installer has indicated that the default action should be performed for this installation request."),
        SPAPI_E_DI_NOFILECOPY                      = (0x800F020F, "The operation does not require any files to be copied."),
        SPAPI_E_INVALID_HWPROFILE                  = (0x800F0210, "The specified hardware profile does not exist."),
        SPAPI_E_NO_DEVICE_SELECTED                 = (0x800F0211, "There is no device information element currently selected for this device information set."),
        SPAPI_E_DEVINFO_LIST_LOCKED                = (0x800F0212, "The operation cannot be performed because the device information set is locked."),
        SPAPI_E_DEVINFO_DATA_LOCKED                = (0x800F0213, "The operation cannot be performed because the device information element is locked."),
        SPAPI_E_DI_BAD_PATH                        = (0x800F0214, "The specified path does not contain any applicable device INFs."),
        SPAPI_E_NO_CLASSINSTALL_PARAMS             = (0x800F0215, "No class installer parameters have been set for the device information set or element."),
        SPAPI_E_FILEQUEUE_LOCKED                   = (0x800F0216, "The operation cannot be performed because the file queue is locked."),
        SPAPI_E_BAD_SERVICE_INSTALLSECT            = (0x800F0217, "A service installation section in this INF is invalid."),
        SPAPI_E_NO_CLASS_DRIVER_LIST               = (0x800F0218, "There is no class driver list for the device information element."),
        SPAPI_E_NO_ASSOCIATED_SERVICE              = (0x800F0219, "The installation failed because a function driver was not specified for this device instance."),
        SPAPI_E_NO_DEFAULT_DEVICE_INTERFACE        = (0x800F021A, "There is presently no default device interface designated for this interface class."),
        SPAPI_E_DEVICE_INTERFACE_ACTIVE            = (0x800F021B, "The operation cannot be performed because the device interface is currently active."),
        SPAPI_E_DEVICE_INTERFACE_REMOVED           = (0x800F021C, "The operation cannot be performed because the device interface has been removed from the system."),
        SPAPI_E_BAD_INTERFACE_INSTALLSECT          = (0x800F021D, "An interface installation section in this INF is invalid."),
        SPAPI_E_NO_SUCH_INTERFACE_CLASS            = (0x800F021E, "This interface class does not exist in the system."),
        SPAPI_E_INVALID_REFERENCE_STRING           = (0x800F021F, "The reference string supplied for this interface device is invalid."),
        SPAPI_E_INVALID_MACHINENAME                = (0x800F0220, "The specified machine name does not conform to Universal Naming Convention (UNCs)."),
        SPAPI_E_REMOTE_COMM_FAILURE                = (0x800F0221, "A general remote communication error occurred."),
        SPAPI_E_MACHINE_UNAVAILABLE                = (0x800F0222, "The machine selected for remote communication is not available at this time."),
        SPAPI_E_NO_CONFIGMGR_SERVICES              = (0x800F0223, "The Plug and Play service is not available on the remote machine."),
        SPAPI_E_INVALID_PROPPAGE_PROVIDER          = (0x800F0224, "The property page provider registry entry is invalid."),
        SPAPI_E_NO_SUCH_DEVICE_INTERFACE           = (0x800F0225, "The requested device interface is not present in the system."),
        SPAPI_E_DI_POSTPROCESSING_REQUIRED         = (0x800F0226, "The device's co-installer has additional work to perform after installation is complete."),
        SPAPI_E_INVALID_COINSTALLER                = (0x800F0227, "The device's co-installer is invalid."),
        SPAPI_E_NO_COMPAT_DRIVERS                  = (0x800F0228, "There are no compatible drivers for this device."),
        SPAPI_E_NO_DEVICE_ICON                     = (0x800F0229, "There is no icon that represents this device or device type."),
        SPAPI_E_INVALID_INF_LOGCONFIG              = (0x800F022A, "A logical configuration specified in this INF is invalid."),
        SPAPI_E_DI_DONT_INSTALL                    = (0x800F022B, "The class installer has denied the request to install or upgrade this device."),
        SPAPI_E_INVALID_FILTER_DRIVER              = (0x800F022C, "One of the filter drivers installed for this device is invalid."),
        SPAPI_E_NON_WINDOWS_NT_DRIVER              = (0x800F022D, "The driver selected for this device does not support Windows XP operating system."),
        SPAPI_E_NON_WINDOWS_DRIVER                 = (0x800F022E, "The driver selected for this device does not support Windows."),
        SPAPI_E_NO_CATALOG_FOR_OEM_INF             = (0x800F022F, "The third-party INF does not contain digital signature information."),
        SPAPI_E_DEVINSTALL_QUEUE_NONNATIVE         = (0x800F0230, "An invalid attempt was made to use a device installation file queue for verification of digital signatures relative to other platforms."),
        SPAPI_E_NOT_DISABLEABLE                    = (0x800F0231, "The device cannot be disabled."),
        SPAPI_E_CANT_REMOVE_DEVINST                = (0x800F0232, "The device could not be dynamically removed."),
        SPAPI_E_INVALID_TARGET                     = (0x800F0233, "Cannot copy to specified target."),
        SPAPI_E_DRIVER_NONNATIVE                   = (0x800F0234, "The driver is not intended for this platform."),
        SPAPI_E_IN_WOW64                           = (0x800F0235, "The operation is not allowed in WOW64."),
        SPAPI_E_SET_SYSTEM_RESTORE_POINT           = (0x800F0236, "The operation involving unsigned file copying was rolled back, so that a system restore point could be set."),
        SPAPI_E_INCORRECTLY_COPIED_INF             = (0x800F0237, "An INF was copied into the Windows INF directory in an improper manner."),
        SPAPI_E_SCE_DISABLED                       = (0x800F0238, "The Security Configuration Editor (SCE) APIs have been disabled on this embedded product."),
        SPAPI_E_UNKNOWN_EXCEPTION                  = (0x800F0239, "An unknown exception was encountered."),
        SPAPI_E_PNP_REGISTRY_ERROR                 = (0x800F023A, "A problem was encountered when accessing the Plug and Play registry database."),
        SPAPI_E_REMOTE_REQUEST_UNSUPPORTED         = (0x800F023B, "The requested operation is not supported for a remote machine."),
        SPAPI_E_NOT_AN_INSTALLED_OEM_INF           = (0x800F023C, "The specified file is not an installed original equipment manufacturer (OEM) INF."),
        SPAPI_E_INF_IN_USE_BY_DEVICES              = (0x800F023D, "One or more devices are presently installed using the specified INF."),
        SPAPI_E_DI_FUNCTION_OBSOLETE               = (0x800F023E, "The requested device install operation is obsolete."),
        SPAPI_E_NO_AUTHENTICODE_CATALOG            = (0x800F023F, "A file could not be verified because it does not have an associated catalog signed via Authenticode."),
        SPAPI_E_AUTHENTICODE_DISALLOWED            = (0x800F0240, "Authenticode signature verification is not supported for the specified INF."),
        SPAPI_E_AUTHENTICODE_TRUSTED_PUBLISHER     = (0x800F0241, "The INF was signed with an Authenticode catalog from a trusted publisher."),
        SPAPI_E_AUTHENTICODE_TRUST_NOT_ESTABLISHED = (0x800F0242, "The publisher of an Authenticode-signed catalog has not yet been established as trusted."),
        SPAPI_E_AUTHENTICODE_PUBLISHER_NOT_TRUSTED = (0x800F0243, "The publisher of an Authenticode-signed catalog was not established as trusted."),
        SPAPI_E_SIGNATURE_OSATTRIBUTE_MISMATCH     = (0x800F0244, "The software was tested for compliance with Windows logo requirements on a different version of Windows and might not be compatible with this version."),
        SPAPI_E_ONLY_VALIDATE_VIA_AUTHENTICODE     = (0x800F0245, "The file can be validated only by a catalog signed via Authenticode."),
        SPAPI_E_DEVICE_INSTALLER_NOT_READY         = (0x800F0246, "One of the installers for this device cannot perform the installation at this time."),
        SPAPI_E_DRIVER_STORE_ADD_FAILED            = (0x800F0247, "A problem was encountered while attempting to add the driver to the store."),
        SPAPI_E_DEVICE_INSTALL_BLOCKED             = (0x800F0248, "The installation of this device is forbidden by system policy. Contact your system administrator."),
        SPAPI_E_DRIVER_INSTALL_BLOCKED             = (0x800F0249, "The installation of this driver is forbidden by system policy. Contact your system administrator."),
        SPAPI_E_WRONG_INF_TYPE                     = (0x800F024A, "The specified INF is the wrong type for this operation."),
        SPAPI_E_FILE_HASH_NOT_IN_CATALOG           = (0x800F024B, "The hash for the file is not present in the specified catalog file. The file is likely corrupt or the victim of tampering."),
        SPAPI_E_DRIVER_STORE_DELETE_FAILED         = (0x800F024C, "A problem was encountered while attempting to delete the driver from the store."),
        SPAPI_E_UNRECOVERABLE_STACK_OVERFLOW       = (0x800F0300, "An unrecoverable stack overflow was encountered."),
        SPAPI_E_ERROR_NOT_INSTALLED                = (0x800F1000, "No installed components were detected."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_SCARD (16) - Smart card subsystem
    // -------------------------------------------------------------------------
    Facility::SmartCard => {
        SCARD_F_INTERNAL_ERROR          = (0x80100001, "An internal consistency check failed."),
        SCARD_E_CANCELLED               = (0x80100002, "The action was canceled by an SCardCancel request."),
        SCARD_E_INVALID_HANDLE          = (0x80100003, "The supplied handle was invalid."),
        SCARD_E_INVALID_PARAMETER       = (0x80100004, "One or more of the supplied parameters could not be properly interpreted."),
        SCARD_E_INVALID_TARGET          = (0x80100005, "Registry startup information is missing or invalid."),
        SCARD_E_NO_MEMORY               = (0x80100006, "Not enough memory available to complete this command."),
        SCARD_F_WAITED_TOO_LONG         = (0x80100007, "An internal consistency timer has expired."),
        SCARD_E_INSUFFICIENT_BUFFER     = (0x80100008, "The data buffer to receive returned data is too small for the returned data."),
        SCARD_E_UNKNOWN_READER          = (0x80100009, "The specified reader name is not recognized."),
        SCARD_E_TIMEOUT                 = (0x8010000A, "The user-specified time-out value has expired."),
        SCARD_E_SHARING_VIOLATION       = (0x8010000B, "The smart card cannot be accessed because of other connections outstanding."),
        SCARD_E_NO_SMARTCARD            = (0x8010000C, "The operation requires a smart card, but no smart card is currently in the device."),
        SCARD_E_UNKNOWN_CARD            = (0x8010000D, "The specified smart card name is not recognized."),
        SCARD_E_CANT_DISPOSE            = (0x8010000E, "The system could not dispose of the media in the requested manner."),
        SCARD_E_PROTO_MISMATCH          = (0x8010000F, "The requested protocols are incompatible with the protocol currently in use with the smart card."),
        SCARD_E_NOT_READY               = (0x80100010, "The reader or smart card is not ready to accept commands."),
        SCARD_E_INVALID_VALUE           = (0x80100011, "One or more of the supplied parameters values could not be properly interpreted."),
        SCARD_E_SYSTEM_CANCELLED        = (0x80100012, "The action was canceled by the system, presumably to log off or shut down."),
        SCARD_F_COMM_ERROR              = (0x80100013, "An internal communications error has been detected."),
        SCARD_F_UNKNOWN_ERROR           = (0x80100014, "An internal error has been detected, but the source is unknown."),
        SCARD_E_INVALID_ATR             = (0x80100015, "An automatic terminal recognition (ATR) obtained from the registry is not a valid ATR string."),
        SCARD_E_NOT_TRANSACTED          = (0x80100016, "An attempt was made to end a nonexistent transaction."),
        SCARD_E_READER_UNAVAILABLE      = (0x80100017, "The specified reader is not currently available for use."),
        SCARD_P_SHUTDOWN                = (0x80100018, "The operation has been aborted to allow the server application to exit."),
        SCARD_E_PCI_TOO_SMALL           = (0x80100019, "The peripheral component interconnect (PCI) Receive buffer was too small."),
        SCARD_E_READER_UNSUPPORTED      = (0x8010001A, "The reader driver does not meet minimal requirements for support."),
        SCARD_E_DUPLICATE_READER        = (0x8010001B, "The reader driver did not produce a unique reader name."),
        SCARD_E_CARD_UNSUPPORTED        = (0x8010001C, "The smart card does not meet minimal requirements for support."),
        SCARD_E_NO_SERVICE              = (0x8010001D, "The smart card resource manager is not running."),
        SCARD_E_SERVICE_STOPPED         = (0x8010001E, "The smart card resource manager has shut down."),
        SCARD_E_UNEXPECTED              = (0x8010001F, "An unexpected card error has occurred."),
        SCARD_E_ICC_INSTALLATION        = (0x80100020, "No primary provider can be found for the smart card."),
        SCARD_E_ICC_CREATEORDER         = (0x80100021, "The requested order of object creation is not supported."),
        SCARD_E_UNSUPPORTED_FEATURE     = (0x80100022, "This smart card does not support the requested feature."),
        SCARD_E_DIR_NOT_FOUND           = (0x80100023, "The identified directory does not exist in the smart card."),
        SCARD_E_FILE_NOT_FOUND          = (0x80100024, "The identified file does not exist in the smart card."),
        SCARD_E_NO_DIR                  = (0x80100025, "The supplied path does not represent a smart card directory."),
        SCARD_E_NO_FILE                 = (0x80100026, "The supplied path does not represent a smart card file."),
        SCARD_E_NO_ACCESS               = (0x80100027, "Access is denied to this file."),
        SCARD_E_WRITE_TOO_MANY          = (0x80100028, "The smart card does not have enough memory to store the information."),
        SCARD_E_BAD_SEEK                = (0x80100029, "There was an error trying to set the smart card file object pointer."),
        SCARD_E_INVALID_CHV             = (0x8010002A, "The supplied PIN is incorrect."),
        SCARD_E_UNKNOWN_RES_MNG         = (0x8010002B, "An unrecognized error code was returned from a layered component."),
        SCARD_E_NO_SUCH_CERTIFICATE     = (0x8010002C, "The requested certificate does not exist."),
        SCARD_E_CERTIFICATE_UNAVAILABLE = (0x8010002D, "The requested certificate could not be obtained."),
        SCARD_E_NO_READERS_AVAILABLE    = (0x8010002E, "Cannot find a smart card reader."),
        SCARD_E_COMM_DATA_LOST          = (0x8010002F, "A communications error with the smart card has been detected. Retry the operation."),
        SCARD_E_NO_KEY_CONTAINER        = (0x80100030, "The requested key container does not exist on the smart card."),
        SCARD_E_SERVER_TOO_BUSY         = (0x80100031, "The smart card resource manager is too busy to complete this operation."),
        SCARD_E_PIN_CACHE_EXPIRED       = (0x80100032, "The smart card PIN cache has expired."),
        SCARD_E_NO_PIN_CACHE            = (0x80100033, "The smart card PIN cannot be cached."),
        SCARD_E_READ_ONLY_CARD          = (0x80100034, "The smart card is read-only and cannot be written to."),
        SCARD_W_UNSUPPORTED_CARD        = (0x80100065, "The reader cannot communicate with the smart card, due to ATR configuration conflicts."),
        SCARD_W_UNRESPONSIVE_CARD       = (0x80100066, "The smart card is not responding to a reset."),
        SCARD_W_UNPOWERED_CARD          = (0x80100067, "Power has been removed from the smart card, so that further communication is not possible."),
        SCARD_W_RESET_CARD              = (0x80100068, "The smart card was reset."),
        SCARD_W_REMOVED_CARD            = (0x80100069, "The smart card has been removed, so further communication is not possible."),
        SCARD_W_SECURITY_VIOLATION      = (0x8010006A, "Access was denied because of a security violation."),
        SCARD_W_WRONG_CHV               = (0x8010006B, "The card cannot be accessed because the wrong PIN was presented."),
        SCARD_W_CHV_BLOCKED             = (0x8010006C, "The card cannot be accessed because the maximum number of PIN entry attempts has been reached."),
        SCARD_W_EOF                     = (0x8010006D, "The end of the smart card file has been reached."),
        SCARD_W_CANCELLED_BY_USER       = (0x8010006E, "The action was canceled by the user."),
        SCARD_W_CARD_NOT_AUTHENTICATED  = (0x8010006F, "No PIN was presented to the smart card."),
        SCARD_W_CACHE_ITEM_NOT_FOUND    = (0x80100070, "The requested item could not be found in the cache."),
        SCARD_W_CACHE_ITEM_STALE        = (0x80100071, "The requested cache item is too old and was deleted from the cache."),
        SCARD_W_CACHE_ITEM_TOO_BIG      = (0x80100072, "The new cache item exceeds the maximum per-item size defined for the cache."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_COMPLUS (17) - COM+ catalog and queued components
    // -------------------------------------------------------------------------
    Facility::ComPlus => {
        COMADMIN_E_OBJECTERRORS                                  = (0x80110401, "Errors occurred accessing one or more objects; the ErrorInfo collection may have more detail."),
        COMADMIN_E_OBJECTINVALID                                 = (0x80110402, "One or more of the object's properties are missing or invalid."),
        COMADMIN_E_KEYMISSING                                    = (0x80110403, "The object was not found in the catalog."),
        COMADMIN_E_ALREADYINSTALLED                              = (0x80110404, "The object is already registered."),
        COMADMIN_E_APP_FILE_WRITEFAIL                            = (0x80110407, "An error occurred writing to the application file."),
        COMADMIN_E_APP_FILE_READFAIL                             = (0x80110408, "An error occurred reading the application file."),
        COMADMIN_E_APP_FILE_VERSION                              = (0x80110409, "Invalid version number in application file."),
        COMADMIN_E_BADPATH                                       = (0x8011040A, "The file path is invalid."),
        COMADMIN_E_APPLICATIONEXISTS                             = (0x8011040B, "The application is already installed."),
        COMADMIN_E_ROLEEXISTS                                    = (0x8011040C, "The role already exists."),
        COMADMIN_E_CANTCOPYFILE                                  = (0x8011040D, "An error occurred copying the file."),
        COMADMIN_E_NOUSER                                        = (0x8011040F, "One or more users are not valid."),
        COMADMIN_E_INVALIDUSERIDS                                = (0x80110410, "One or more users in the application file are not valid."),
        COMADMIN_E_NOREGISTRYCLSID                               = (0x80110411, "The component's CLSID is missing or corrupt."),
        COMADMIN_E_BADREGISTRYPROGID                             = (0x80110412, "The component's programmatic ID is missing or corrupt."),
        COMADMIN_E_AUTHENTICATIONLEVEL                           = (0x80110413, "Unable to set required authentication level for update request."),
        COMADMIN_E_USERPASSWDNOTVALID                            = (0x80110414, "The identity or password set on the application is not valid."),
        COMADMIN_E_CLSIDORIIDMISMATCH                            = (0x80110418, "Application file CLSIDs or instance identifiers (IIDs) do not match corresponding DLLs."),
        COMADMIN_E_REMOTEINTERFACE                               = (0x80110419, "Interface information is either missing or changed."),
        COMADMIN_E_DLLREGISTERSERVER                             = (0x8011041A, "DllRegisterServer failed on component install."),
        COMADMIN_E_NOSERVERSHARE                                 = (0x8011041B, "No server file share available."),
        COMADMIN_E_DLLLOADFAILED                                 = (0x8011041D, "DLL could not be loaded."),
        COMADMIN_E_BADREGISTRYLIBID                              = (0x8011041E, "The registered TypeLib ID is not valid."),
        COMADMIN_E_APPDIRNOTFOUND                                = (0x8011041F, "Application install directory not found."),
        COMADMIN_E_REGISTRARFAILED                               = (0x80110423, "Errors occurred while in the component registrar."),
        COMADMIN_E_COMPFILE_DOESNOTEXIST                         = (0x80110424, "The file does not exist."),
        COMADMIN_E_COMPFILE_LOADDLLFAIL                          = (0x80110425, "The DLL could not be loaded."),
        COMADMIN_E_COMPFILE_GETCLASSOBJ                          = (0x80110426, "GetClassObject failed in the DLL."),
        COMADMIN_E_COMPFILE_CLASSNOTAVAIL                        = (0x80110427, "The DLL does not support the components listed in the TypeLib."),
        COMADMIN_E_COMPFILE_BADTLB                               = (0x80110428, "The TypeLib could not be loaded."),
        COMADMIN_E_COMPFILE_NOTINSTALLABLE                       = (0x80110429, "The file does not contain components or component information."),
        COMADMIN_E_NOTCHANGEABLE                                 = (0x8011042A, "Changes to this object and its subobjects have been disabled."),
        COMADMIN_E_NOTDELETEABLE                                 = (0x8011042B, "The delete function has been disabled for this object."),
        COMADMIN_E_SESSION                                       = (0x8011042C, "The server catalog version is not supported."),
        COMADMIN_E_COMP_MOVE_LOCKED                              = (0x8011042D, "The component move was disallowed because the source or destination application is either a system application or currently locked against changes."),
        COMADMIN_E_COMP_MOVE_BAD_DEST                            = (0x8011042E, "The component move failed because the destination application no longer exists."),
        COMADMIN_E_REGISTERTLB                                   = (0x80110430, "The system was unable to register the TypeLib."),
        COMADMIN_E_SYSTEMAPP                                     = (0x80110433, "This operation cannot be performed on the system application."),
        COMADMIN_E_COMPFILE_NOREGISTRAR                          = (0x80110434, "The component registrar referenced in this file is not available."),
        COMADMIN_E_COREQCOMPINSTALLED                            = (0x80110435, "A component in the same DLL is already installed."),
        COMADMIN_E_SERVICENOTINSTALLED                           = (0x80110436, "The service is not installed."),
        COMADMIN_E_PROPERTYSAVEFAILED                            = (0x80110437, "One or more property settings are either invalid or in conflict with each other."),
        COMADMIN_E_OBJECTEXISTS                                  = (0x80110438, "The object you are attempting to add or rename already exists."),
        COMADMIN_E_COMPONENTEXISTS                               = (0x80110439, "The component already exists."),
        COMADMIN_E_REGFILE_CORRUPT                               = (0x8011043B, "The registration file is corrupt."),
        COMADMIN_E_PROPERTY_OVERFLOW                             = (0x8011043C, "The property value is too large."),
        COMADMIN_E_NOTINREGISTRY                                 = (0x8011043E, "Object was not found in registry."),
        COMADMIN_E_OBJECTNOTPOOLABLE                             = (0x8011043F, "This object cannot be pooled."),
        COMADMIN_E_APPLID_MATCHES_CLSID                          = (0x80110446, "A CLSID with the same GUID as the new application ID is already installed on this machine."),
        COMADMIN_E_ROLE_DOES_NOT_EXIST                           = (0x80110447, "A role assigned to a component, interface, or method did not exist in the application."),
        COMADMIN_E_START_APP_NEEDS_COMPONENTS                    = (0x80110448, "You must have components in an application to start the application."),
        COMADMIN_E_REQUIRES_DIFFERENT_PLATFORM                   = (0x80110449, "This operation is not enabled on this platform."),
        COMADMIN_E_CAN_NOT_EXPORT_APP_PROXY                      = (0x8011044A, "Application proxy is not exportable."),
        COMADMIN_E_CAN_NOT_START_APP                             = (0x8011044B, "Failed to start application because it is either a library application or an application proxy."),
        COMADMIN_E_CAN_NOT_EXPORT_SYS_APP                        = (0x8011044C, "System application is not exportable."),
        COMADMIN_E_CANT_SUBSCRIBE_TO_COMPONENT                   = (0x8011044D, "Cannot subscribe to this component (the component may have been imported)."),
        COMADMIN_E_EVENTCLASS_CANT_BE_SUBSCRIBER                 = (0x8011044E, "An event class cannot also be a subscriber component."),
        COMADMIN_E_LIB_APP_PROXY_INCOMPATIBLE                    = (0x8011044F, "Library applications and application proxies are incompatible."),
        COMADMIN_E_BASE_PARTITION_ONLY                           = (0x80110450, "This function is valid for the base partition only."),
        COMADMIN_E_START_APP_DISABLED                            = (0x80110451, "You cannot start an application that has been disabled."),
        COMADMIN_E_CAT_DUPLICATE_PARTITION_NAME                  = (0x80110457, "The specified partition name is already in use on this computer."),
        COMADMIN_E_CAT_INVALID_PARTITION_NAME                    = (0x80110458, "The specified partition name is invalid. Check that the name contains at least one visible character."),
        COMADMIN_E_CAT_PARTITION_IN_USE                          = (0x80110459, "The partition cannot be deleted because it is the default partition for one or more users."),
        COMADMIN_E_FILE_PARTITION_DUPLICATE_FILES                = (0x8011045A, "The partition cannot be exported because one or more components in the partition have the same file name."),
        COMADMIN_E_CAT_IMPORTED_COMPONENTS_NOT_ALLOWED           = (0x8011045B, "Applications that contain one or more imported components cannot be installed into a nonbase partition."),
        COMADMIN_E_AMBIGUOUS_APPLICATION_NAME                    = (0x8011045C, "The application name is not unique and cannot be resolved to an application ID."),
        COMADMIN_E_AMBIGUOUS_PARTITION_NAME                      = (0x8011045D, "The partition name is not unique and cannot be resolved to a partition ID."),
        COMADMIN_E_REGDB_NOTINITIALIZED                          = (0x80110472, "The COM+ registry database has not been initialized."),
        COMADMIN_E_REGDB_NOTOPEN                                 = (0x80110473, "The COM+ registry database is not open."),
        COMADMIN_E_REGDB_SYSTEMERR                               = (0x80110474, "The COM+ registry database detected a system error."),
        COMADMIN_E_REGDB_ALREADYRUNNING                          = (0x80110475, "The COM+ registry database is already running."),
        COMADMIN_E_MIG_VERSIONNOTSUPPORTED                       = (0x80110480, "This version of the COM+ registry database cannot be migrated."),
        COMADMIN_E_MIG_SCHEMANOTFOUND                            = (0x80110481, "The schema version to be migrated could not be found in the COM+ registry database."),
        COMADMIN_E_CAT_BITNESSMISMATCH                           = (0x80110482, "There was a type mismatch between binaries."),
        COMADMIN_E_CAT_UNACCEPTABLEBITNESS                       = (0x80110483, "A binary of unknown or invalid type was provided."),
        COMADMIN_E_CAT_WRONGAPPBITNESS                           = (0x80110484, "There was a type mismatch between a binary and an application."),
        COMADMIN_E_CAT_PAUSE_RESUME_NOT_SUPPORTED                = (0x80110485, "The application cannot be paused or resumed."),
        COMADMIN_E_CAT_SERVERFAULT                               = (0x80110486, "The COM+ catalog server threw an exception during execution."),
        COMQC_E_APPLICATION_NOT_QUEUED                           = (0x80110600, "Only COM+ applications marked \"queued\" can be invoked using the \"queue\" moniker."),
        COMQC_E_NO_QUEUEABLE_INTERFACES                          = (0x80110601, "At least one interface must be marked \"queued\" to create a queued component instance with the \"queue\" moniker."),
        COMQC_E_QUEUING_SERVICE_NOT_AVAILABLE                    = (0x80110602, "Message Queuing is required for the requested operation and is not installed."),
        COMQC_E_NO_IPERSISTSTREAM                                = (0x80110603, "Unable to marshal an interface that does not support IPersistStream."),
        COMQC_E_BAD_MESSAGE                                      = (0x80110604, "The message is improperly formatted or was damaged in transit."),
        COMQC_E_UNAUTHENTICATED                                  = (0x80110605, "An unauthenticated message was received by an application that accepts only authenticated messages."),
        COMQC_E_UNTRUSTED_ENQUEUER                               = (0x80110606, "The message was requeued or moved by a user not in the QC Trusted Server role."),
        MSDTC_E_DUPLICATE_RESOURCE                               = (0x80110701, "Cannot create a duplicate resource of type Distributed Transaction Coordinator."),
        COMADMIN_E_OBJECT_PARENT_MISSING                         = (0x80110808, "One of the objects being inserted or updated does not belong to a valid parent collection."),
        COMADMIN_E_OBJECT_DOES_NOT_EXIST                         = (0x80110809, "One of the specified objects cannot be found."),
        COMADMIN_E_APP_NOT_RUNNING                               = (0x8011080A, "The specified application is not currently running."),
        COMADMIN_E_INVALID_PARTITION                             = (0x8011080B, "The partitions specified are not valid."),
        COMADMIN_E_SVCAPP_NOT_POOLABLE_OR_RECYCLABLE             = (0x8011080D, "COM+ applications that run as Windows NT service may not be pooled or recycled."),
        COMADMIN_E_USER_IN_SET                                   = (0x8011080E, "One or more users are already assigned to a local partition set."),
        COMADMIN_E_CANTRECYCLELIBRARYAPPS                        = (0x8011080F, "Library applications may not be recycled."),
        COMADMIN_E_CANTRECYCLESERVICEAPPS                        = (0x80110811, "Applications running as Windows NT services may not be recycled."),
        COMADMIN_E_PROCESSALREADYRECYCLED                        = (0x80110812, "The process has already been recycled."),
        COMADMIN_E_PAUSEDPROCESSMAYNOTBERECYCLED                 = (0x80110813, "A paused process may not be recycled."),
        COMADMIN_E_CANTMAKEINPROCSERVICE                         = (0x80110814, "Library applications may not be Windows NT services."),
        COMADMIN_E_PROGIDINUSEBYCLSID                            = (0x80110815, "The ProgID provided to the copy operation is invalid. The ProgID is in use by another registered CLSID."),
        COMADMIN_E_DEFAULT_PARTITION_NOT_IN_SET                  = (0x80110816, "The partition specified as the default is not a member of the partition set."),
        COMADMIN_E_RECYCLEDPROCESSMAYNOTBEPAUSED                 = (0x80110817, "A recycled process cannot be paused."),
        COMADMIN_E_PARTITION_ACCESSDENIED                        = (0x80110818, "Access to the specified partition is denied."),
        COMADMIN_E_PARTITION_MSI_ONLY                            = (0x80110819, "Only application files (*.msi files) can be installed into partitions."),
        COMADMIN_E_LEGACYCOMPS_NOT_ALLOWED_IN_1_0_FORMAT         = (0x8011081A, "Applications containing one or more legacy components cannot be exported to 1.0 format."),
        COMADMIN_E_LEGACYCOMPS_NOT_ALLOWED_IN_NONBASE_PARTITIONS = (0x8011081B, "Legacy components cannot exist in nonbase partitions."),
        COMADMIN_E_COMP_MOVE_SOURCE                              = (0x8011081C, "A component cannot be moved (or copied) from the System Application, an application proxy, or a nonchangeable application."),
        COMADMIN_E_COMP_MOVE_DEST                                = (0x8011081D, "A component cannot be moved (or copied) to the System Application, an application proxy or a nonchangeable application."),
        COMADMIN_E_COMP_MOVE_PRIVATE                             = (0x8011081E, "A private component cannot be moved (or copied) to a library application or to the base partition."),
        COMADMIN_E_BASEPARTITION_REQUIRED_IN_SET                 = (0x8011081F, "The Base Application Partition exists in all partition sets and cannot be removed."),
        COMADMIN_E_CANNOT_ALIAS_EVENTCLASS                       = (0x80110820, "Alas, Event Class components cannot be aliased."),
        COMADMIN_E_PRIVATE_ACCESSDENIED                          = (0x80110821, "Access is denied because the component is private."),
        COMADMIN_E_SAFERINVALID                                  = (0x80110822, "The specified SAFER level is invalid."),
        COMADMIN_E_REGISTRY_ACCESSDENIED                         = (0x80110823, "The specified user cannot write to the system registry."),
        COMADMIN_E_PARTITIONS_DISABLED                           = (0x80110824, "COM+ partitions are currently disabled."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_HTTP (25) - HTTP status mapping
    // -------------------------------------------------------------------------
    Facility::Http => {
        HTTP_E_STATUS_UNEXPECTED              = (0x80190001, "Unexpected HTTP status code."),
        HTTP_E_STATUS_UNEXPECTED_REDIRECTION  = (0x80190003, "Unexpected redirection status code (3xx)."),
        HTTP_E_STATUS_UNEXPECTED_CLIENT_ERROR = (0x80190004, "Unexpected client error status code (4xx)."),
        HTTP_E_STATUS_UNEXPECTED_SERVER_ERROR = (0x80190005, "Unexpected server error status code (5xx)."),
        HTTP_E_STATUS_AMBIGUOUS               = (0x8019012C, "Multiple choices (300)."),
        HTTP_E_STATUS_MOVED                   = (0x8019012D, "Moved permanently (301)."),
        HTTP_E_STATUS_REDIRECT                = (0x8019012E, "Found (302)."),
        HTTP_E_STATUS_REDIRECT_METHOD         = (0x8019012F, "See Other (303)."),
        HTTP_E_STATUS_NOT_MODIFIED            = (0x80190130, "Not modified (304)."),
        HTTP_E_STATUS_USE_PROXY               = (0x80190131, "Use proxy (305)."),
        HTTP_E_STATUS_REDIRECT_KEEP_VERB      = (0x80190133, "Temporary redirect (307)."),
        HTTP_E_STATUS_BAD_REQUEST             = (0x80190190, "Bad request (400)."),
        HTTP_E_STATUS_DENIED                  = (0x80190191, "Unauthorized (401)."),
        HTTP_E_STATUS_PAYMENT_REQ             = (0x80190192, "Payment required (402)."),
        HTTP_E_STATUS_FORBIDDEN               = (0x80190193, "Forbidden (403)."),
        HTTP_E_STATUS_NOT_FOUND               = (0x80190194, "Not found (404)."),
        HTTP_E_STATUS_BAD_METHOD              = (0x80190195, "Method not allowed (405)."),
        HTTP_E_STATUS_NONE_ACCEPTABLE         = (0x80190196, "Not acceptable (406)."),
        HTTP_E_STATUS_PROXY_AUTH_REQ          = (0x80190197, "Proxy authentication required (407)."),
        HTTP_E_STATUS_REQUEST_TIMEOUT         = (0x80190198, "Request timeout (408)."),
        HTTP_E_STATUS_CONFLICT                = (0x80190199, "Conflict (409)."),
        HTTP_E_STATUS_GONE                    = (0x8019019A, "Gone (410)."),
        HTTP_E_STATUS_LENGTH_REQUIRED         = (0x8019019B, "Length required (411)."),
        HTTP_E_STATUS_PRECOND_FAILED          = (0x8019019C, "Precondition failed (412)."),
        HTTP_E_STATUS_REQUEST_TOO_LARGE       = (0x8019019D, "Request entity too large (413)."),
        HTTP_E_STATUS_URI_TOO_LONG            = (0x8019019E, "Request-URI too long (414)."),
        HTTP_E_STATUS_UNSUPPORTED_MEDIA       = (0x8019019F, "Unsupported media type (415)."),
        HTTP_E_STATUS_RANGE_NOT_SATISFIABLE   = (0x801901A0, "Requested range not satisfiable (416)."),
        HTTP_E_STATUS_EXPECTATION_FAILED      = (0x801901A1, "Expectation failed (417)."),
        HTTP_E_STATUS_SERVER_ERROR            = (0x801901F4, "Internal server error (500)."),
        HTTP_E_STATUS_NOT_SUPPORTED           = (0x801901F5, "Not implemented (501)."),
        HTTP_E_STATUS_BAD_GATEWAY             = (0x801901F6, "Bad gateway (502)."),
        HTTP_E_STATUS_SERVICE_UNAVAIL         = (0x801901F7, "Service unavailable (503)."),
        HTTP_E_STATUS_GATEWAY_TIMEOUT         = (0x801901F8, "Gateway timeout (504)."),
        HTTP_E_STATUS_VERSION_NOT_SUP         = (0x801901F9, "Version not supported (505)."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_USERMODE_FILTER_MANAGER (31) - Filter manager
    // -------------------------------------------------------------------------
    Facility::FilterManager => {
        ERROR_FLT_NO_HANDLER_DEFINED           = (0x801F0001, "A handler was not defined by the filter for this operation."),
        ERROR_FLT_CONTEXT_ALREADY_DEFINED      = (0x801F0002, "A context is already defined for this object."),
        ERROR_FLT_INVALID_ASYNCHRONOUS_REQUEST = (0x801F0003, "Asynchronous requests are not valid for this operation."),
        ERROR_FLT_DISALLOW_FAST_IO             = (0x801F0004, "Disallow the Fast IO path for this operation."),
        ERROR_FLT_INVALID_NAME_REQUEST         = (0x801F0005, "An invalid name request was made. The name requested cannot be retrieved at this time."),
        ERROR_FLT_NOT_SAFE_TO_POST_OPERATION   = (0x801F0006, "Posting this operation to a worker thread for further processing is not safe at this time because it could lead to a system deadlock."),
        ERROR_FLT_NOT_INITIALIZED              = (0x801F0007, "The Filter Manager was not initialized when a filter tried to register. Make sure that the Filter Manager is loaded as a driver."),
        ERROR_FLT_FILTER_NOT_READY             = (0x801F0008, "The filter is not ready for attachment to volumes because it has not finished initializing (FltStartFiltering has not been called)."),
        ERROR_FLT_POST_OPERATION_CLEANUP       = (0x801F0009, "The filter must clean up any operation-specific context at this time because it is being removed from the system before the operation is completed by the lower drivers."),
        ERROR_FLT_INTERNAL_ERROR               = (0x801F000A, "The Filter Manager had an internal error from which it cannot recover; therefore, the operation has failed. This is usually the result of a filter returning an invalid value from a preoperation callback."),
        ERROR_FLT_DELETING_OBJECT              = (0x801F000B, "The object specified for this action is in the process of being deleted; therefore, the action requested cannot be completed at this time."),
        ERROR_FLT_MUST_BE_NONPAGED_POOL        = (0x801F000C, "Nonpaged pool must be used for this type of context."),
        ERROR_FLT_DUPLICATE_ENTRY              = (0x801F000D, "A duplicate handler definition has been provided for an operation."),
        ERROR_FLT_CBDQ_DISABLED                = (0x801F000E, "The callback data queue has been disabled."),
        ERROR_FLT_DO_NOT_ATTACH                = (0x801F000F, "Do not attach the filter to the volume at this time."),
        ERROR_FLT_DO_NOT_DETACH                = (0x801F0010, "Do not detach the filter from the volume at this time."),
        ERROR_FLT_INSTANCE_ALTITUDE_COLLISION  = (0x801F0011, "An instance already exists at this altitude on the volume specified."),
        ERROR_FLT_INSTANCE_NAME_COLLISION      = (0x801F0012, "An instance already exists with this name on the volume specified."),
        ERROR_FLT_FILTER_NOT_FOUND             = (0x801F0013, "The system could not find the filter specified."),
        ERROR_FLT_VOLUME_NOT_FOUND             = (0x801F0014, "The system could not find the volume specified."),
        ERROR_FLT_INSTANCE_NOT_FOUND           = (0x801F0015, "The system could not find the instance specified."),
        ERROR_FLT_CONTEXT_ALLOCATION_NOT_FOUND = (0x801F0016, "No registered context allocation definition was found for the given request."),
        ERROR_FLT_INVALID_CONTEXT_REGISTRATION = (0x801F0017, "An invalid parameter was specified during context registration."),
        ERROR_FLT_NAME_CACHE_MISS              = (0x801F0018, "The name requested was not found in the Filter Manager name cache and could not be retrieved from the file system."),
        ERROR_FLT_NO_DEVICE_OBJECT             = (0x801F0019, "The requested device object does not exist for the given volume."),
        ERROR_FLT_VOLUME_ALREADY_MOUNTED       = (0x801F001A, "The specified volume is already mounted."),
        ERROR_FLT_ALREADY_ENLISTED             = (0x801F001B, "The specified Transaction Context is already enlisted in a transaction."),
        ERROR_FLT_CONTEXT_ALREADY_LINKED       = (0x801F001C, "The specified context is already attached to another object."),
        ERROR_FLT_NO_WAITER_FOR_REPLY          = (0x801F0020, "No waiter is present for the filter's reply to this message."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_BACKGROUNDCOPY (32) - Background Intelligent Transfer Service
    // -------------------------------------------------------------------------
    Facility::BackgroundCopy => {
        BG_S_ERROR_CONTEXT_NONE                       = (0x00200006, "No errors have occurred."),
        BG_S_PARTIAL_COMPLETE                         = (0x00200017, "Some of the transferred files were deleted because they were incomplete."),
        BG_S_UNABLE_TO_DELETE_FILES                   = (0x0020001A, "Some of the temporary files could not be deleted. Check the system event log for the complete list of files that could not be deleted."),
        BG_E_NOT_FOUND                                = (0x80200001, "The requested job was not found."),
        BG_E_INVALID_STATE                            = (0x80200002, "The requested action is not allowed in the current job state. The job might have been canceled or completed transferring. It is in a read-only state now."),
        BG_E_EMPTY                                    = (0x80200003, "There are no files attached to this job. Attach files to the job, and then try again."),
        BG_E_FILE_NOT_AVAILABLE                       = (0x80200004, "No file is available because no URL generated an error."),
        BG_E_PROTOCOL_NOT_AVAILABLE                   = (0x80200005, "No protocol is available because no URL generated an error."),
        BG_E_ERROR_CONTEXT_UNKNOWN                    = (0x80200007, "The error occurred in an unknown location."),
        BG_E_ERROR_CONTEXT_GENERAL_QUEUE_MANAGER      = (0x80200008, "The error occurred in the Background Intelligent Transfer Service (BITS) queue manager."),
        BG_E_ERROR_CONTEXT_LOCAL_FILE                 = (0x80200009, "The error occurred while the local file was being processed. Verify that the file is not in use, and then try again."),
        BG_E_ERROR_CONTEXT_REMOTE_FILE                = (0x8020000A, "The error occurred while the remote file was being processed."),
        BG_E_ERROR_CONTEXT_GENERAL_TRANSPORT          = (0x8020000B, "The error occurred in the transport layer. The client could not connect to the server."),
        BG_E_ERROR_CONTEXT_QUEUE_MANAGER_NOTIFICATION = (0x8020000C, "The error occurred while the notification callback was being processed. Background Intelligent Transfer Service (BITS) will try again later."),
        BG_E_DESTINATION_LOCKED                       = (0x8020000D, "The destination file system volume is not available. Verify that another program, such as CheckDisk, is not running, which would lock the volume. When the volume is available, Background Intelligent Transfer Service (BITS) will try again."),
        BG_E_VOLUME_CHANGED                           = (0x8020000E, "The destination volume has changed. If the disk is removable, it might have been replaced with a different disk. Reinsert the original disk and resume the job."),
        BG_E_ERROR_INFORMATION_UNAVAILABLE            = (0x8020000F, "No errors have occurred."),
        BG_E_NETWORK_DISCONNECTED                     = (0x80200010, "There are currently no active network connections. Background Intelligent Transfer Service (BITS) will try again when an adapter is connected."),
        BG_E_MISSING_FILE_SIZE                        = (0x80200011, "The server did not return the file size. The URL might point to dynamic content. The Content-Length header is not available in the server's HTTP reply."),
        BG_E_INSUFFICIENT_HTTP_SUPPORT                = (0x80200012, "The server does not support HTTP 1.1."),
        BG_E_INSUFFICIENT_RANGE_SUPPORT               = (0x80200013, "The server does not support the necessary HTTP protocol. Background Intelligent Transfer Service (BITS) requires that the server support the Range protocol header."),
        BG_E_REMOTE_NOT_SUPPORTED                     = (0x80200014, "Background Intelligent Transfer Service (BITS) cannot be used remotely."),
        BG_E_NEW_OWNER_DIFF_MAPPING                   = (0x80200015, "The drive mapping for the job is different for the current owner than for the previous owner. Use a UNC path instead."),
        BG_E_NEW_OWNER_NO_FILE_ACCESS                 = (0x80200016, "The new owner has insufficient access to the local files for the job. The new owner might not have permissions to access the job files. Verify that the new owner has sufficient permissions, and then try again."),
        BG_E_PROXY_LIST_TOO_LARGE                     = (0x80200018, "The HTTP proxy list cannot be longer than 32,000 characters. Try again with a shorter proxy list."),
        BG_E_PROXY_BYPASS_LIST_TOO_LARGE              = (0x80200019, "The HTTP proxy bypass list cannot be longer than 32,000 characters. Try again with a shorter bypass proxy list."),
        BG_E_INVALID_SERVER_RESPONSE                  = (0x8020001B, "The server's response was not valid. The server was not following the defined protocol. Resume the job, and then Background Intelligent Transfer Service (BITS) will try again."),
        BG_E_TOO_MANY_FILES                           = (0x8020001C, "No more files can be added to this job."),
        BG_E_LOCAL_FILE_CHANGED                       = (0x8020001D, "The local file was changed during the transfer. Recreate the job, and then try to transfer it again."),
        BG_E_ERROR_CONTEXT_REMOTE_APPLICATION         = (0x8020001E, "The program on the remote server reported the error."),
        BG_E_SESSION_NOT_FOUND                        = (0x8020001F, "The specified session could not be found on the server. Background Intelligent Transfer Service (BITS) will try again."),
        BG_E_TOO_LARGE                                = (0x80200020, "The job is too large for the server to accept. This job might exceed a job size limit set by the server administrator. Reduce the size of the job, and then try again."),
        BG_E_STRING_TOO_LONG                          = (0x80200021, "The specified string is too long."),
        BG_E_CLIENT_SERVER_PROTOCOL_MISMATCH          = (0x80200022, "The client and server versions of Background Intelligent Transfer Service (BITS) are incompatible."),
        BG_E_SERVER_EXECUTE_ENABLE                    = (0x80200023, "Scripting OR execute permissions are enabled on the IIS virtual directory associated with the job. To upload files to the virtual directory, disable the scripting and execute permissions on the virtual directory."),
        BG_E_NO_PROGRESS                              = (0x80200024, "The job is not making headway. The server may be misconfigured. Background Intelligent Transfer Service (BITS) will try again later."),
        BG_E_USERNAME_TOO_LARGE                       = (0x80200025, "The user name cannot be longer than 300 characters. Try again with a shorter name."),
        BG_E_PASSWORD_TOO_LARGE                       = (0x80200026, "The password cannot be longer than 65,536 characters. Try again with a shorter password."),
        BG_E_INVALID_AUTH_TARGET                      = (0x80200027, "The authentication target specified in the credentials is not defined."),
        BG_E_INVALID_AUTH_SCHEME                      = (0x80200028, "The authentication scheme specified in the credentials is not defined."),
        BG_E_FILE_NOT_FOUND                           = (0x80200029, "The specified file name does not match any of the files in the job."),
        BG_E_INVALID_RANGE                            = (0x8020002A, "The specified byte range is invalid."),
        BG_E_OVERLAPPING_RANGES                       = (0x8020002B, "The list of byte ranges contains some overlapping ranges, which are not supported."),
        BG_E_CONNECT_FAILURE                          = (0x8020002C, "A connection could not be established."),
        BG_E_CONNECTION_CLOSED                        = (0x8020002D, "The connection was closed prematurely."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_WINDOWSUPDATE (36) - Windows Update Agent
    // -------------------------------------------------------------------------
    Facility::WindowsUpdate => {
        WU_S_SERVICE_STOP               = (0x00240001, "Windows Update Agent was stopped successfully."),
        WU_S_SELFUPDATE                 = (0x00240002, "Windows Update Agent updated itself."),
        WU_S_UPDATE_ERROR               = (0x00240003, "Operation completed successfully but there were errors applying the updates."),
        WU_S_MARKED_FOR_DISCONNECT      = (0x00240004, "A callback was marked to be disconnected later because the request to disconnect the operation came while a callback was executing."),
        WU_S_REBOOT_REQUIRED            = (0x00240005, "The system must be restarted to complete installation of the update."),
        WU_S_ALREADY_INSTALLED          = (0x00240006, "The update to be installed is already installed on the system."),
        WU_S_ALREADY_UNINSTALLED        = (0x00240007, "The update to be removed is not installed on the system."),
        WU_S_ALREADY_DOWNLOADED         = (0x00240008, "The update to be downloaded has already been downloaded."),
        WU_E_NO_SERVICE                 = (0x80240001, "Windows Update Agent was unable to provide the service."),
        WU_E_MAX_CAPACITY_REACHED       = (0x80240002, "The maximum capacity of the service was exceeded."),
        WU_E_UNKNOWN_ID                 = (0x80240003, "An ID cannot be found."),
        WU_E_NOT_INITIALIZED            = (0x80240004, "The object could not be initialized."),
        WU_E_RANGEOVERLAP               = (0x80240005, "The update handler requested a byte range overlapping a previously requested range."),
        WU_E_TOOMANYRANGES              = (0x80240006, "The requested number of byte ranges exceeds the maximum number (2^31 - 1)."),
        WU_E_INVALIDINDEX               = (0x80240007, "The index to a collection was invalid."),
        WU_E_ITEMNOTFOUND               = (0x80240008, "The key for the item queried could not be found."),
        WU_E_OPERATIONINPROGRESS        = (0x80240009, "Another conflicting operation was in progress. Some operations such as installation cannot be performed twice simultaneously."),
        WU_E_COULDNOTCANCEL             = (0x8024000A, "Cancellation of the operation was not allowed."),
        WU_E_CALL_CANCELLED             = (0x8024000B, "Operation was canceled."),
        WU_E_NOOP                       = (0x8024000C, "No operation was required."),
        WU_E_XML_MISSINGDATA            = (0x8024000D, "Windows Update Agent could not find required information in the update's XML data."),
        WU_E_XML_INVALID                = (0x8024000E, "Windows Update Agent found invalid information in the update's XML data."),
        WU_E_CYCLE_DETECTED             = (0x8024000F, "Circular update relationships were detected in the metadata."),
        WU_E_TOO_DEEP_RELATION          = (0x80240010, "Update relationships too deep to evaluate were evaluated."),
        WU_E_INVALID_RELATIONSHIP       = (0x80240011, "An invalid update relationship was detected."),
        WU_E_REG_VALUE_INVALID          = (0x80240012, "An invalid registry value was read."),
        WU_E_DUPLICATE_ITEM             = (0x80240013, "Operation tried to add a duplicate item to a list."),
        WU_E_INSTALL_NOT_ALLOWED        = (0x80240016, "Operation tried to install while another installation was in progress or the system was pending a mandatory restart."),
        WU_E_NOT_APPLICABLE             = (0x80240017, "Operation was not performed because there are no applicable updates."),
        WU_E_NO_USERTOKEN               = (0x80240018, "Operation failed because a required user token is missing."),
        WU_E_EXCLUSIVE_INSTALL_CONFLICT = (0x80240019, "An exclusive update cannot be installed with other updates at the same time."),
        WU_E_POLICY_NOT_SET             = (0x8024001A, "A policy value was not set."),
        WU_E_SELFUPDATE_IN_PROGRESS     = (0x8024001B, "The operation could not be performed because the Windows Update Agent is self-updating."),
        WU_E_INVALID_UPDATE             = (0x8024001D, "An update contains invalid metadata."),
        WU_E_SERVICE_STOP               = (0x8024001E, "Operation did not complete because the service or system was being shut down."),
        WU_E_NO_CONNECTION              = (0x8024001F, "Operation did not complete because the network connection was unavailable."),
        WU_E_NO_INTERACTIVE_USER        = (0x80240020, "Operation did not complete because there is no logged-on interactive user."),
        WU_E_TIME_OUT                   = (0x80240021, "Operation did not complete because it timed out."),
        WU_E_ALL_UPDATES_FAILED         = (0x80240022, "Operation failed for all the updates."),
        WU_E_EULAS_DECLINED             = (0x80240023, "The license terms for all updates were declined."),
        WU_E_NO_UPDATE                  = (0x80240024, "There are no updates."),
        WU_E_USER_ACCESS_DISABLED       = (0x80240025, "Group Policy settings prevented access to Windows Update."),
        WU_E_INVALID_UPDATE_TYPE        = (0x80240026, "The type of update is invalid."),
        WU_E_URL_TOO_LONG               = (0x80240027, "The URL exceeded the maximum length."),
        WU_E_UNINSTALL_NOT_ALLOWED      = (0x80240028, "The update could not be uninstalled because the request did not originate from a Windows Server Update Services (WSUS) server."),
        WU_E_INVALID_PRODUCT_LICENSE    = (0x80240029, "Search may have missed some updates because there is an unlicensed application on the system."),
        WU_E_MISSING_HANDLER            = (0x8024002A, "A component required to detect applicable updates was missing."),
        WU_E_LEGACYSERVER               = (0x8024002B, "An operation did not complete because it requires a newer version of server."),
        WU_E_BIN_SOURCE_ABSENT          = (0x8024002C, "A delta-compressed update could not be installed because it required the source."),
        WU_E_SOURCE_ABSENT              = (0x8024002D, "A full-file update could not be installed because it required the source."),
        WU_E_WU_DISABLED                = (0x8024002E, "Access to an unmanaged server is not allowed."),
        WU_E_CALL_CANCELLED_BY_POLICY   = (0x8024002F, "Operation did not complete because the DisableWindowsUpdateAccess policy was set."),
        WU_E_INVALID_PROXY_SERVER       = (0x80240030, "The format of the proxy list was invalid."),
        WU_E_INVALID_FILE               = (0x80240031, "The file is in the wrong format."),
        WU_E_INVALID_CRITERIA           = (0x80240032, "The search criteria string was invalid."),
        WU_E_EULA_UNAVAILABLE           = (0x80240033, "License terms could not be downloaded."),
        WU_E_DOWNLOAD_FAILED            = (0x80240034, "Update failed to download."),
        WU_E_UPDATE_NOT_PROCESSED       = (0x80240035, "The update was not processed."),
        WU_E_INVALID_OPERATION          = (0x80240036, "The object's current state did not allow the operation."),
        WU_E_NOT_SUPPORTED              = (0x80240037, "The functionality for the operation is not supported."),
        WU_E_WINHTTP_INVALID_FILE       = (0x80240038, "The downloaded file has an unexpected content type."),
        WU_E_TOO_MANY_RESYNC            = (0x80240039, "Agent is asked by server to resync too many times."),
        WU_E_NO_SERVER_CORE_SUPPORT     = (0x80240040, "The WUA API method does not run on a Server Core installation."),
        WU_E_SYSPREP_IN_PROGRESS        = (0x80240041, "Service is not available while sysprep is running."),
        WU_E_UNKNOWN_SERVICE            = (0x80240042, "The update service is no longer registered with automatic updates."),
        WU_E_UNEXPECTED                 = (0x80240FFF, "An operation failed due to reasons not covered by another error code."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_GRAPHICS (38) - Display driver model
    // -------------------------------------------------------------------------
    Facility::Graphics => {
        ERROR_GRAPHICS_NOT_EXCLUSIVE_MODE_OWNER               = (0x80262000, "Exclusive mode ownership is needed to create unmanaged primary allocation."),
        ERROR_GRAPHICS_INSUFFICIENT_DMA_BUFFER                = (0x80262001, "The driver needs more direct memory access (DMA) buffer space to complete the requested operation."),
        ERROR_GRAPHICS_INVALID_DISPLAY_ADAPTER                = (0x80262002, "The specified display adapter handle is invalid."),
        ERROR_GRAPHICS_ADAPTER_WAS_RESET                      = (0x80262003, "The specified display adapter and all of its state have been reset."),
        ERROR_GRAPHICS_INVALID_DRIVER_MODEL                   = (0x80262004, "The driver stack does not match the expected driver model."),
        ERROR_GRAPHICS_PRESENT_MODE_CHANGED                   = (0x80262005, "Present happened but ended up into the changed desktop mode."),
        ERROR_GRAPHICS_PRESENT_OCCLUDED                       = (0x80262006, "Nothing to present due to desktop occlusion."),
        ERROR_GRAPHICS_PRESENT_DENIED                         = (0x80262007, "Not able to present due to denial of desktop access."),
        ERROR_GRAPHICS_CANNOTCOLORCONVERT                     = (0x80262008, "Not able to present with color conversion."),
        ERROR_GRAPHICS_NO_VIDEO_MEMORY                        = (0x80262100, "Not enough video memory available to complete the operation."),
        ERROR_GRAPHICS_CANT_LOCK_MEMORY                       = (0x80262101, "Could not probe and lock the underlying memory of an allocation."),
        ERROR_GRAPHICS_ALLOCATION_BUSY                        = (0x80262102, "The allocation is currently busy."),
        ERROR_GRAPHICS_TOO_MANY_REFERENCES                    = (0x80262103, "An object being referenced has already reached the maximum reference count and cannot be referenced further."),
        ERROR_GRAPHICS_TRY_AGAIN_LATER                        = (0x80262104, "A problem could not be solved due to an existing condition. Try again later."),
        ERROR_GRAPHICS_TRY_AGAIN_NOW                          = (0x80262105, "A problem could not be solved due to an existing condition. Try again now."),
        ERROR_GRAPHICS_ALLOCATION_INVALID                     = (0x80262106, "The allocation is invalid."),
        ERROR_GRAPHICS_UNSWIZZLING_APERTURE_UNAVAILABLE       = (0x80262107, "No more unswizzling apertures are currently available."),
        ERROR_GRAPHICS_UNSWIZZLING_APERTURE_UNSUPPORTED       = (0x80262108, "The current allocation cannot be unswizzled by an aperture."),
        ERROR_GRAPHICS_CANT_EVICT_PINNED_ALLOCATION           = (0x80262109, "The request failed because a pinned allocation cannot be evicted."),
        ERROR_GRAPHICS_INVALID_ALLOCATION_USAGE               = (0x80262110, "The allocation cannot be used from its current segment location for the specified operation."),
        ERROR_GRAPHICS_CANT_RENDER_LOCKED_ALLOCATION          = (0x80262111, "A locked allocation cannot be used in the current command buffer."),
        ERROR_GRAPHICS_ALLOCATION_CLOSED                      = (0x80262112, "The allocation being referenced has been closed permanently."),
        ERROR_GRAPHICS_INVALID_ALLOCATION_INSTANCE            = (0x80262113, "An invalid allocation instance is being referenced."),
        ERROR_GRAPHICS_INVALID_ALLOCATION_HANDLE              = (0x80262114, "An invalid allocation handle is being referenced."),
        ERROR_GRAPHICS_WRONG_ALLOCATION_DEVICE                = (0x80262115, "The allocation being referenced does not belong to the current device."),
        ERROR_GRAPHICS_ALLOCATION_CONTENT_LOST                = (0x80262116, "The specified allocation lost its content."),
        ERROR_GRAPHICS_GPU_EXCEPTION_ON_DEVICE                = (0x80262200, "A graphics processing unit (GPU) exception was detected on the given device. The device cannot be scheduled."),
        ERROR_GRAPHICS_INVALID_VIDPN_TOPOLOGY                 = (0x80262300, "The specified video present network (VidPN) topology is invalid."),
        ERROR_GRAPHICS_VIDPN_TOPOLOGY_NOT_SUPPORTED           = (0x80262301, "The specified VidPN topology is valid but is not supported by this model of the display adapter."),
        ERROR_GRAPHICS_VIDPN_TOPOLOGY_CURRENTLY_NOT_SUPPORTED = (0x80262302, "The specified VidPN topology is valid but is not currently supported by the display adapter due to allocation of its resources."),
        ERROR_GRAPHICS_INVALID_VIDPN                          = (0x80262303, "The specified VidPN handle is invalid."),
        ERROR_GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE           = (0x80262304, "The specified video present source is invalid."),
        ERROR_GRAPHICS_INVALID_VIDEO_PRESENT_TARGET           = (0x80262305, "The specified video present target is invalid."),
        ERROR_GRAPHICS_VIDPN_MODALITY_NOT_SUPPORTED           = (0x80262306, "The specified VidPN modality is not supported (for example, at least two of the pinned modes are not cofunctional)."),
        ERROR_GRAPHICS_INVALID_VIDPN_SOURCEMODESET            = (0x80262308, "The specified VidPN source mode set is invalid."),
        ERROR_GRAPHICS_INVALID_VIDPN_TARGETMODESET            = (0x80262309, "The specified VidPN target mode set is invalid."),
        ERROR_GRAPHICS_INVALID_FREQUENCY                      = (0x8026230A, "The specified video signal frequency is invalid."),
        ERROR_GRAPHICS_INVALID_ACTIVE_REGION                  = (0x8026230B, "The specified video signal active region is invalid."),
        ERROR_GRAPHICS_INVALID_TOTAL_REGION                   = (0x8026230C, "The specified video signal total region is invalid."),
        ERROR_GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE_MODE      = (0x80262310, "The specified video present source mode is invalid."),
        ERROR_GRAPHICS_INVALID_VIDEO_PRESENT_TARGET_MODE      = (0x80262311, "The specified video present target mode is invalid."),
        ERROR_GRAPHICS_PINNED_MODE_MUST_REMAIN_IN_SET         = (0x80262312, "The pinned mode must remain in the set on the VidPN's cofunctional modality enumeration."),
        ERROR_GRAPHICS_PATH_ALREADY_IN_TOPOLOGY               = (0x80262313, "The specified video present path is already in the VidPN topology."),
        ERROR_GRAPHICS_MODE_ALREADY_IN_MODESET                = (0x80262314, "The specified mode is already in the mode set."),
        ERROR_GRAPHICS_INVALID_VIDEOPRESENTSOURCESET          = (0x80262315, "The specified video present source set is invalid."),
        ERROR_GRAPHICS_INVALID_VIDEOPRESENTTARGETSET          = (0x80262316, "The specified video present target set is invalid."),
        ERROR_GRAPHICS_SOURCE_ALREADY_IN_SET                  = (0x80262317, "The specified video present source is already in the video present source set."),
        ERROR_GRAPHICS_TARGET_ALREADY_IN_SET                  = (0x80262318, "The specified video present target is already in the video present target set."),
        ERROR_GRAPHICS_INVALID_VIDPN_PRESENT_PATH             = (0x80262319, "The specified VidPN present path is invalid."),
        ERROR_GRAPHICS_NO_RECOMMENDED_VIDPN_TOPOLOGY          = (0x8026231A, "The miniport has no recommendation for augmenting the specified VidPN topology."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_TPM_SERVICES (40) - Trusted Platform Module and TPM Base Services
    // -------------------------------------------------------------------------
    Facility::TpmServices => {
        TPM_E_ERROR_MASK                   = (0x80280000, "This is an error mask to convert Trusted Platform Module (TPM) hardware errors to Windows errors."),
        TPM_E_AUTHFAIL                     = (0x80280001, "Authentication failed."),
        TPM_E_BADINDEX                     = (0x80280002, "The index to a Platform Configuration Register (PCR), DIR, or other register is incorrect."),
        TPM_E_BAD_PARAMETER                = (0x80280003, "One or more parameters are bad."),
        TPM_E_AUDITFAILURE                 = (0x80280004, "An operation completed successfully but the auditing of that operation failed."),
        TPM_E_CLEAR_DISABLED               = (0x80280005, "The clear disable flag is set and all clear operations now require physical access."),
        TPM_E_DEACTIVATED                  = (0x80280006, "Activate the Trusted Platform Module (TPM)."),
        TPM_E_DISABLED                     = (0x80280007, "Enable the Trusted Platform Module (TPM)."),
        TPM_E_DISABLED_CMD                 = (0x80280008, "The target command has been disabled."),
        TPM_E_FAIL                         = (0x80280009, "The operation failed."),
        TPM_E_BAD_ORDINAL                  = (0x8028000A, "The ordinal was unknown or inconsistent."),
        TPM_E_INSTALL_DISABLED             = (0x8028000B, "The ability to install an owner is disabled."),
        TPM_E_INVALID_KEYHANDLE            = (0x8028000C, "The key handle cannot be interpreted."),
        TPM_E_KEYNOTFOUND                  = (0x8028000D, "The key handle points to an invalid key."),
        TPM_E_INAPPROPRIATE_ENC            = (0x8028000E, "Unacceptable encryption scheme."),
        TPM_E_MIGRATEFAIL                  = (0x8028000F, "Migration authorization failed."),
        TPM_E_INVALID_PCR_INFO             = (0x80280010, "PCR information could not be interpreted."),
        TPM_E_NOSPACE                      = (0x80280011, "No room to load key."),
        TPM_E_NOSRK                        = (0x80280012, "There is no storage root key (SRK) set."),
        TPM_E_NOTSEALED_BLOB               = (0x80280013, "An encrypted blob is invalid or was not created by this TPM."),
        TPM_E_OWNER_SET                    = (0x80280014, "The Trusted Platform Module (TPM) already has an owner."),
        TPM_E_RESOURCES                    = (0x80280015, "The TPM has insufficient internal resources to perform the requested action."),
        TPM_E_SHORTRANDOM                  = (0x80280016, "A random string was too short."),
        TPM_E_SIZE                         = (0x80280017, "The TPM does not have the space to perform the operation."),
        TPM_E_WRONGPCRVAL                  = (0x80280018, "The named PCR value does not match the current PCR value."),
        TPM_E_BAD_PARAM_SIZE               = (0x80280019, "The paramSize argument to the command has the incorrect value."),
        TPM_E_SHA_THREAD                   = (0x8028001A, "There is no existing SHA-1 thread."),
        TPM_E_SHA_ERROR                    = (0x8028001B, "The calculation is unable to proceed because the existing SHA-1 thread has already encountered an error."),
        TPM_E_FAILEDSELFTEST               = (0x8028001C, "Self-test has failed and the TPM has shut down."),
        TPM_E_AUTH2FAIL                    = (0x8028001D, "The authorization for the second key in a two-key function failed authorization."),
        TPM_E_BADTAG                       = (0x8028001E, "The tag value sent to for a command is invalid."),
        TPM_E_IOERROR                      = (0x8028001F, "An I/O error occurred transmitting information to the TPM."),
        TPM_E_ENCRYPT_ERROR                = (0x80280020, "The encryption process had a problem."),
        TPM_E_DECRYPT_ERROR                = (0x80280021, "The decryption process did not complete."),
        TPM_E_INVALID_AUTHHANDLE           = (0x80280022, "An invalid handle was used."),
        TPM_E_NO_ENDORSEMENT               = (0x80280023, "The TPM does not have an endorsement key (EK) installed."),
        TPM_E_INVALID_KEYUSAGE             = (0x80280024, "The usage of a key is not allowed."),
        TPM_E_WRONG_ENTITYTYPE             = (0x80280025, "The submitted entity type is not allowed."),
        TPM_E_INVALID_POSTINIT             = (0x80280026, "The command was received in the wrong sequence relative to TPM_Init and a subsequent TPM_Startup."),
        TPM_E_INAPPROPRIATE_SIG            = (0x80280027, "Signed data cannot include additional DER information."),
        TPM_E_BAD_KEY_PROPERTY             = (0x80280028, "The key properties in TPM_KEY_PARMs are not supported by this TPM."),
        TPM_E_BAD_MIGRATION                = (0x80280029, "The migration properties of this key are incorrect."),
        TPM_E_BAD_SCHEME                   = (0x8028002A, "The signature or encryption scheme for this key is incorrect or not permitted in this situation."),
        TPM_E_BAD_DATASIZE                 = (0x8028002B, "The size of the data (or blob) parameter is bad or inconsistent with the referenced key."),
        TPM_E_BAD_MODE                     = (0x8028002C, "A mode parameter is bad, such as capArea or subCapArea for TPM_GetCapability, physicalPresence parameter for TPM_PhysicalPresence, or migrationType for TPM_CreateMigrationBlob."),
        TPM_E_BAD_PRESENCE                 = (0x8028002D, "Either the physicalPresence or physicalPresenceLock bits have the wrong value."),
        TPM_E_BAD_VERSION                  = (0x8028002E, "The TPM cannot perform this version of the capability."),
        TPM_E_NO_WRAP_TRANSPORT            = (0x8028002F, "The TPM does not allow for wrapped transport sessions."),
        TPM_E_AUDITFAIL_UNSUCCESSFUL       = (0x80280030, "TPM audit construction failed and the underlying command was returning a failure code also."),
        TPM_E_AUDITFAIL_SUCCESSFUL         = (0x80280031, "TPM audit construction failed and the underlying command was returning success."),
        TPM_E_NOTRESETABLE                 = (0x80280032, "Attempt to reset a PCR that does not have the resettable attribute."),
        TPM_E_NOTLOCAL                     = (0x80280033, "Attempt to reset a PCR register that requires locality and the locality modifier not part of command transport."),
        TPM_E_BAD_TYPE                     = (0x80280034, "Make identity blob not properly typed."),
        TPM_E_INVALID_RESOURCE             = (0x80280035, "When saving context identified resource type does not match actual resource."),
        TPM_E_NOTFIPS                      = (0x80280036, "The TPM is attempting to execute a command only available when in FIPS mode."),
        TPM_E_INVALID_FAMILY               = (0x80280037, "The command is attempting to use an invalid family ID."),
        TPM_E_NO_NV_PERMISSION             = (0x80280038, "The permission to manipulate the NV storage is not available."),
        TPM_E_REQUIRES_SIGN                = (0x80280039, "The operation requires a signed command."),
        TPM_E_KEY_NOTSUPPORTED             = (0x8028003A, "Wrong operation to load an NV key."),
        TPM_E_AUTH_CONFLICT                = (0x8028003B, "NV_LoadKey blob requires both owner and blob authorization."),
        TPM_E_AREA_LOCKED                  = (0x8028003C, "The NV area is locked and not writable."),
        TPM_E_BAD_LOCALITY                 = (0x8028003D, "The locality is incorrect for the attempted operation."),
        TPM_E_READ_ONLY                    = (0x8028003E, "The NV area is read-only and cannot be written to."),
        TPM_E_PER_NOWRITE                  = (0x8028003F, "There is no protection on the write to the NV area."),
        TPM_E_FAMILYCOUNT                  = (0x80280040, "The family count value does not match."),
        TPM_E_WRITE_LOCKED                 = (0x80280041, "The NV area has already been written to."),
        TPM_E_BAD_ATTRIBUTES               = (0x80280042, "The NV area attributes conflict."),
        TPM_E_INVALID_STRUCTURE            = (0x80280043, "The structure tag and version are invalid or inconsistent."),
        TPM_E_KEY_OWNER_CONTROL            = (0x80280044, "The key is under control of the TPM owner and can only be evicted by the TPM owner."),
        TPM_E_BAD_COUNTER                  = (0x80280045, "The counter handle is incorrect."),
        TPM_E_NOT_FULLWRITE                = (0x80280046, "The write is not a complete write of the area."),
        TPM_E_CONTEXT_GAP                  = (0x80280047, "The gap between saved context counts is too large."),
        TPM_E_MAXNVWRITES                  = (0x80280048, "The maximum number of NV writes without an owner has been exceeded."),
        TPM_E_NOOPERATOR                   = (0x80280049, "No operator AuthData value is set."),
        TPM_E_RESOURCEMISSING              = (0x8028004A, "The resource pointed to by context is not loaded."),
        TPM_E_DELEGATE_LOCK                = (0x8028004B, "The delegate administration is locked."),
        TPM_E_DELEGATE_FAMILY              = (0x8028004C, "Attempt to manage a family other than the delegated family."),
        TPM_E_DELEGATE_ADMIN               = (0x8028004D, "Delegation table management not enabled."),
        TPM_E_TRANSPORT_NOTEXCLUSIVE       = (0x8028004E, "There was a command executed outside an exclusive transport session."),
        TPM_E_OWNER_CONTROL                = (0x8028004F, "Attempt to context save an owner evict controlled key."),
        TPM_E_DAA_RESOURCES                = (0x80280050, "The DAA command has no resources available to execute the command."),
        TPM_E_DAA_INPUT_DATA0              = (0x80280051, "The consistency check on DAA parameter inputData0 has failed."),
        TPM_E_DAA_INPUT_DATA1              = (0x80280052, "The consistency check on DAA parameter inputData1 has failed."),
        TPM_E_DAA_ISSUER_SETTINGS          = (0x80280053, "The consistency check on DAA_issuerSettings has failed."),
        TPM_E_DAA_TPM_SETTINGS             = (0x80280054, "The consistency check on DAA_tpmSpecific has failed."),
        TPM_E_DAA_STAGE                    = (0x80280055, "The atomic process indicated by the submitted DAA command is not the expected process."),
        TPM_E_DAA_ISSUER_VALIDITY          = (0x80280056, "The issuer's validity check has detected an inconsistency."),
        TPM_E_DAA_WRONG_W                  = (0x80280057, "The consistency check on w has failed."),
        TPM_E_BAD_HANDLE                   = (0x80280058, "The handle is incorrect."),
        TPM_E_BAD_DELEGATE                 = (0x80280059, "Delegation is not correct."),
        TPM_E_BADCONTEXT                   = (0x8028005A, "The context blob is invalid."),
        TPM_E_TOOMANYCONTEXTS              = (0x8028005B, "Too many contexts held by the TPM."),
        TPM_E_MA_TICKET_SIGNATURE          = (0x8028005C, "Migration authority signature validation failure."),
        TPM_E_MA_DESTINATION               = (0x8028005D, "Migration destination not authenticated."),
        TPM_E_MA_SOURCE                    = (0x8028005E, "Migration source incorrect."),
        TPM_E_MA_AUTHORITY                 = (0x8028005F, "Incorrect migration authority."),
        TPM_E_PERMANENTEK                  = (0x80280061, "Attempt to revoke the EK and the EK is not revocable."),
        TPM_E_BAD_SIGNATURE                = (0x80280062, "Bad signature of CMK ticket."),
        TPM_E_NOCONTEXTSPACE               = (0x80280063, "There is no room in the context list for additional contexts."),
        TPM_E_COMMAND_BLOCKED              = (0x80280400, "The command was blocked."),
        TPM_E_INVALID_HANDLE               = (0x80280401, "The specified handle was not found."),
        TPM_E_DUPLICATE_VHANDLE            = (0x80280402, "The TPM returned a duplicate handle and the command needs to be resubmitted."),
        TPM_E_EMBEDDED_COMMAND_BLOCKED     = (0x80280403, "The command within the transport was blocked."),
        TPM_E_EMBEDDED_COMMAND_UNSUPPORTED = (0x80280404, "The command within the transport is not supported."),
        TPM_E_RETRY                        = (0x80280800, "The TPM is too busy to respond to the command immediately, but the command could be resubmitted at a later time."),
        TPM_E_NEEDS_SELFTEST               = (0x80280801, "SelfTestFull has not been run."),
        TPM_E_DOING_SELFTEST               = (0x80280802, "The TPM is currently executing a full self-test."),
        TPM_E_DEFEND_LOCK_RUNNING          = (0x80280803, "The TPM is defending against dictionary attacks and is in a time-out period."),
        TBS_E_INTERNAL_ERROR               = (0x80284001, "An internal software error has been detected."),
        TBS_E_BAD_PARAMETER                = (0x80284002, "One or more input parameters are bad."),
        TBS_E_INVALID_OUTPUT_POINTER       = (0x80284003, "A specified output pointer is bad."),
        TBS_E_INVALID_CONTEXT              = (0x80284004, "The specified context handle does not refer to a valid context."),
        TBS_E_INSUFFICIENT_BUFFER          = (0x80284005, "A specified output buffer is too small."),
        TBS_E_IOERROR                      = (0x80284006, "An error occurred while communicating with the TPM."),
        TBS_E_INVALID_CONTEXT_PARAM        = (0x80284007, "One or more context parameters are invalid."),
        TBS_E_SERVICE_NOT_RUNNING          = (0x80284008, "The TPM Base Services (TBS) is not running and could not be started."),
        TBS_E_TOO_MANY_TBS_CONTEXTS        = (0x80284009, "A new context could not be created because there are too many open contexts."),
        TBS_E_TOO_MANY_RESOURCES           = (0x8028400A, "A new virtual resource could not be created because there are too many open virtual resources."),
        TBS_E_SERVICE_START_PENDING        = (0x8028400B, "The TBS service has been started but is not yet running."),
        TBS_E_PPI_NOT_SUPPORTED            = (0x8028400C, "The physical presence interface is not supported."),
        TBS_E_COMMAND_CANCELED             = (0x8028400D, "The command was canceled."),
        TBS_E_BUFFER_TOO_LARGE             = (0x8028400E, "The input or output buffer is too large."),
        TBS_E_TPM_NOT_FOUND                = (0x8028400F, "A compatible Trusted Platform Module (TPM) Security Device cannot be found on this computer."),
        TBS_E_SERVICE_DISABLED             = (0x80284010, "The TBS service has been disabled."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_TPM_SOFTWARE (41) - TPM command library and TBS internals
    // -------------------------------------------------------------------------
    Facility::TpmSoftware => {
        TPMAPI_E_INVALID_STATE                        = (0x80290100, "The command buffer is not in the correct state."),
        TPMAPI_E_NOT_ENOUGH_DATA                      = (0x80290101, "The command buffer does not contain enough data to satisfy the request."),
        TPMAPI_E_TOO_MUCH_DATA                        = (0x80290102, "The command buffer cannot contain any more data."),
        TPMAPI_E_INVALID_OUTPUT_POINTER               = (0x80290103, "One or more output parameters was null or invalid."),
        TPMAPI_E_INVALID_PARAMETER                    = (0x80290104, "One or more input parameters are invalid."),
        TPMAPI_E_OUT_OF_MEMORY                        = (0x80290105, "Not enough memory was available to satisfy the request."),
        TPMAPI_E_BUFFER_TOO_SMALL                     = (0x80290106, "The specified buffer was too small."),
        TPMAPI_E_INTERNAL_ERROR                       = (0x80290107, "An internal error was detected."),
        TPMAPI_E_ACCESS_DENIED                        = (0x80290108, "The caller does not have the appropriate rights to perform the requested operation."),
        TPMAPI_E_AUTHORIZATION_FAILED                 = (0x80290109, "The specified authorization information was invalid."),
        TPMAPI_E_INVALID_CONTEXT_HANDLE               = (0x8029010A, "The specified context handle was not valid."),
        TPMAPI_E_TBS_COMMUNICATION_ERROR              = (0x8029010B, "An error occurred while communicating with the TBS."),
        TPMAPI_E_TPM_COMMAND_ERROR                    = (0x8029010C, "The TPM returned an unexpected result."),
        TPMAPI_E_MESSAGE_TOO_LARGE                    = (0x8029010D, "The message was too large for the encoding scheme."),
        TPMAPI_E_INVALID_ENCODING                     = (0x8029010E, "The encoding in the binary large object (BLOB) was not recognized."),
        TPMAPI_E_INVALID_KEY_SIZE                     = (0x8029010F, "The key size is not valid."),
        TPMAPI_E_ENCRYPTION_FAILED                    = (0x80290110, "The encryption operation failed."),
        TPMAPI_E_INVALID_KEY_PARAMS                   = (0x80290111, "The key parameters structure was not valid."),
        TPMAPI_E_INVALID_MIGRATION_AUTHORIZATION_BLOB = (0x80290112, "The requested supplied data does not appear to be a valid migration authorization BLOB."),
        TPMAPI_E_INVALID_PCR_INDEX                    = (0x80290113, "The specified PCR index was invalid."),
        TPMAPI_E_INVALID_DELEGATE_BLOB                = (0x80290114, "The data given does not appear to be a valid delegate BLOB."),
        TPMAPI_E_INVALID_CONTEXT_PARAMS               = (0x80290115, "One or more of the specified context parameters was not valid."),
        TPMAPI_E_INVALID_KEY_BLOB                     = (0x80290116, "The data given does not appear to be a valid key BLOB."),
        TPMAPI_E_INVALID_PCR_DATA                     = (0x80290117, "The specified PCR data was invalid."),
        TPMAPI_E_INVALID_OWNER_AUTH                   = (0x80290118, "The format of the owner authorization data was invalid."),
        TBSIMP_E_BUFFER_TOO_SMALL                     = (0x80290200, "The specified buffer was too small."),
        TBSIMP_E_CLEANUP_FAILED                       = (0x80290201, "The context could not be cleaned up."),
        TBSIMP_E_INVALID_CONTEXT_HANDLE               = (0x80290202, "The specified context handle is invalid."),
        TBSIMP_E_INVALID_CONTEXT_PARAM                = (0x80290203, "An invalid context parameter was specified."),
        TBSIMP_E_TPM_ERROR                            = (0x80290204, "An error occurred while communicating with the TPM."),
        TBSIMP_E_HASH_BAD_KEY                         = (0x80290205, "No entry with the specified key was found."),
        TBSIMP_E_DUPLICATE_VHANDLE                    = (0x80290206, "The specified virtual handle matches a virtual handle already in use."),
        TBSIMP_E_INVALID_OUTPUT_POINTER               = (0x80290207, "The pointer to the returned handle location was null or invalid."),
        TBSIMP_E_INVALID_PARAMETER                    = (0x80290208, "One or more parameters are invalid."),
        TBSIMP_E_RPC_INIT_FAILED                      = (0x80290209, "The RPC subsystem could not be initialized."),
        TBSIMP_E_SCHEDULER_NOT_RUNNING                = (0x8029020A, "The TBS scheduler is not running."),
        TBSIMP_E_COMMAND_CANCELED                     = (0x8029020B, "The command was canceled."),
        TBSIMP_E_OUT_OF_MEMORY                        = (0x8029020C, "There was not enough memory to fulfill the request."),
        TBSIMP_E_LIST_NO_MORE_ITEMS                   = (0x8029020D, "The specified list is empty, or the iteration has reached the end of the list."),
        TBSIMP_E_LIST_NOT_FOUND                       = (0x8029020E, "The specified item was not found in the list."),
        TBSIMP_E_NOT_ENOUGH_SPACE                     = (0x8029020F, "The TPM does not have enough space to load the requested resource."),
        TBSIMP_E_NOT_ENOUGH_TPM_CONTEXTS              = (0x80290210, "There are too many TPM contexts in use."),
        TBSIMP_E_COMMAND_FAILED                       = (0x80290211, "The TPM command failed."),
        TBSIMP_E_UNKNOWN_ORDINAL                      = (0x80290212, "The TBS does not recognize the specified ordinal."),
        TBSIMP_E_RESOURCE_EXPIRED                     = (0x80290213, "The requested resource is no longer available."),
        TBSIMP_E_INVALID_RESOURCE                     = (0x80290214, "The resource type did not match."),
        TBSIMP_E_NOTHING_TO_UNLOAD                    = (0x80290215, "No resources can be unloaded."),
        TBSIMP_E_HASH_TABLE_FULL                      = (0x80290216, "No new entries can be added to the hash table."),
        TBSIMP_E_TOO_MANY_TBS_CONTEXTS                = (0x80290217, "A new TBS context could not be created because there are too many open contexts."),
        TBSIMP_E_TOO_MANY_RESOURCES                   = (0x80290218, "A new virtual resource could not be created because there are too many open virtual resources."),
        TBSIMP_E_PPI_NOT_SUPPORTED                    = (0x80290219, "The physical presence interface is not supported."),
        TBSIMP_E_TPM_INCOMPATIBLE                     = (0x8029021A, "TBS is not compatible with the version of TPM found on the system."),
        TPM_E_PPI_ACPI_FAILURE                        = (0x80290300, "A general error was detected when attempting to acquire the BIOS response to a physical presence command."),
        TPM_E_PPI_USER_ABORT                          = (0x80290301, "The user failed to confirm the TPM operation request."),
        TPM_E_PPI_BIOS_FAILURE                        = (0x80290302, "The BIOS failure prevented the successful execution of the requested TPM operation (for example, invalid TPM operation request, BIOS communication error with the TPM)."),
        TPM_E_PPI_NOT_SUPPORTED                       = (0x80290303, "The BIOS does not support the physical presence interface."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_PLA (48) - Performance Logs and Alerts
    // -------------------------------------------------------------------------
    Facility::Pla => {
        PLA_S_PROPERTY_IGNORED              = (0x00300100, "Property value will be ignored."),
        PLA_E_DCS_NOT_FOUND                 = (0x80300002, "Data Collector Set was not found."),
        PLA_E_TOO_MANY_FOLDERS              = (0x80300045, "Unable to start Data Collector Set because there are too many folders."),
        PLA_E_NO_MIN_DISK                   = (0x80300070, "Not enough free disk space to start Data Collector Set."),
        PLA_E_DCS_IN_USE                    = (0x803000AA, "The Data Collector Set or one of its dependencies is already in use."),
        PLA_E_DCS_ALREADY_EXISTS            = (0x803000B7, "Data Collector Set already exists."),
        PLA_E_PROPERTY_CONFLICT             = (0x80300101, "Property value conflict."),
        PLA_E_DCS_SINGLETON_REQUIRED        = (0x80300102, "The current configuration for this Data Collector Set requires that it contain exactly one Data Collector."),
        PLA_E_CREDENTIALS_REQUIRED          = (0x80300103, "A user account is required to commit the current Data Collector Set properties."),
        PLA_E_DCS_NOT_RUNNING               = (0x80300104, "Data Collector Set is not running."),
        PLA_E_CONFLICT_INCL_EXCL_API        = (0x80300105, "A conflict was detected in the list of include and exclude APIs. Do not specify the same API in both the include list and the exclude list."),
        PLA_E_NETWORK_EXE_NOT_VALID         = (0x80300106, "The executable path you have specified refers to a network share or UNC path."),
        PLA_E_EXE_ALREADY_CONFIGURED        = (0x80300107, "The executable path you have specified is already configured for API tracing."),
        PLA_E_EXE_PATH_NOT_VALID            = (0x80300108, "The executable path you have specified does not exist. Verify that the specified path is correct."),
        PLA_E_DC_ALREADY_EXISTS             = (0x80300109, "Data Collector already exists."),
        PLA_E_DCS_START_WAIT_TIMEOUT        = (0x8030010A, "The wait for the Data Collector Set start notification has timed out."),
        PLA_E_DC_START_WAIT_TIMEOUT         = (0x8030010B, "The wait for the Data Collector to start has timed out."),
        PLA_E_REPORT_WAIT_TIMEOUT           = (0x8030010C, "The wait for the report generation tool to finish has timed out."),
        PLA_E_NO_DUPLICATES                 = (0x8030010D, "Duplicate items are not allowed."),
        PLA_E_EXE_FULL_PATH_REQUIRED        = (0x8030010E, "When specifying the executable to trace, you must specify a full path to the executable and not just a file name."),
        PLA_E_INVALID_SESSION_NAME          = (0x8030010F, "The session name provided is invalid."),
        PLA_E_PLA_CHANNEL_NOT_ENABLED       = (0x80300110, "The Event Log channel Microsoft-Windows-Diagnosis-PLA/Operational must be enabled to perform this operation."),
        PLA_E_TASKSCHED_CHANNEL_NOT_ENABLED = (0x80300111, "The Event Log channel Microsoft-Windows-TaskScheduler must be enabled to perform this operation."),
        PLA_E_RULES_MANAGER_FAILED          = (0x80300112, "The execution of the Rules Manager failed."),
        PLA_E_CABAPI_FAILURE                = (0x80300113, "An error occurred while trying to compress or extract the data."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_FVE (49) - BitLocker Drive Encryption
    // -------------------------------------------------------------------------
    Facility::Fve => {
        FVE_E_LOCKED_VOLUME                       = (0x80310000, "This drive is locked by BitLocker Drive Encryption. You must unlock this drive from Control Panel."),
        FVE_E_NOT_ENCRYPTED                       = (0x80310001, "This drive is not encrypted."),
        FVE_E_NO_TPM_BIOS                         = (0x80310002, "The BIOS did not correctly communicate with the Trusted Platform Module (TPM). Contact the computer manufacturer for BIOS upgrade instructions."),
        FVE_E_NO_MBR_METRIC                       = (0x80310003, "The BIOS did not correctly communicate with the master boot record (MBR). Contact the computer manufacturer for BIOS upgrade instructions."),
        FVE_E_NO_BOOTSECTOR_METRIC                = (0x80310004, "A required TPM measurement is missing. If there is a bootable CD or DVD in your computer, remove it, restart the computer, and turn on BitLocker again. If the problem persists, ensure the master boot record is up to date."),
        FVE_E_NO_BOOTMGR_METRIC                   = (0x80310005, "The boot sector of this drive is not compatible with BitLocker Drive Encryption. Use the Bootrec.exe tool in the Windows Recovery Environment to update or repair the boot manager (BOOTMGR)."),
        FVE_E_WRONG_BOOTMGR                       = (0x80310006, "The boot manager of this operating system is not compatible with BitLocker Drive Encryption. Use the Bootrec.exe tool in the Windows Recovery Environment to update or repair the boot manager (BOOTMGR)."),
        FVE_E_SECURE_KEY_REQUIRED                 = (0x80310007, "At least one secure key protector is required for this operation to be performed."),
        FVE_E_NOT_ACTIVATED                       = (0x80310008, "BitLocker Drive Encryption is not enabled on this drive. Turn on BitLocker."),
        FVE_E_ACTION_NOT_ALLOWED                  = (0x80310009, "BitLocker Drive Encryption cannot perform the requested action. This condition may occur when two requests are issued at the same time. Wait a few moments and then try the action again."),
        FVE_E_AD_SCHEMA_NOT_INSTALLED             = (0x8031000A, "The Active Directory Domain Services forest does not contain the required attributes and classes to host BitLocker Drive Encryption or Trusted Platform Module information. Contact your domain administrator to verify that any required BitLocker Active Directory schema extensions have been installed."),
        FVE_E_AD_INVALID_DATATYPE                 = (0x8031000B, "The type of the data obtained from Active Directory was not expected. The BitLocker recovery information may be missing or corrupted."),
        FVE_E_AD_INVALID_DATASIZE                 = (0x8031000C, "The size of the data obtained from Active Directory was not expected. The BitLocker recovery information may be missing or corrupted."),
        FVE_E_AD_NO_VALUES                        = (0x8031000D, "The attribute read from Active Directory does not contain any values. The BitLocker recovery information may be missing or corrupted."),
        FVE_E_AD_ATTR_NOT_SET                     = (0x8031000E, "The attribute was not set. Verify that you are logged on with a domain account that has the ability to write information to Active Directory objects."),
        FVE_E_AD_GUID_NOT_FOUND                   = (0x8031000F, "The specified attribute cannot be found in Active Directory Domain Services. Contact your domain administrator to verify that any required BitLocker Active Directory schema extensions have been installed."),
        FVE_E_BAD_INFORMATION                     = (0x80310010, "The BitLocker metadata for the encrypted drive is not valid. You can attempt to repair the drive to restore access."),
        FVE_E_TOO_SMALL                           = (0x80310011, "The drive cannot be encrypted because it does not have enough free space. Delete any unnecessary data on the drive to create additional free space and then try again."),
        FVE_E_SYSTEM_VOLUME                       = (0x80310012, "The drive cannot be encrypted because it contains system boot information. Create a separate partition for use as the system drive that contains the boot information and a second partition for use as the operating system drive and then encrypt the operating system drive."),
        FVE_E_FAILED_WRONG_FS                     = (0x80310013, "The drive cannot be encrypted because the file system is not supported."),
        FVE_E_FAILED_BAD_FS                       = (0x80310014, "The file system size is larger than the partition size in the partition table. This drive may be corrupt or may have been tampered with. To use it with BitLocker, you must reformat the partition."),
        FVE_E_NOT_SUPPORTED                       = (0x80310015, "This drive cannot be encrypted."),
        FVE_E_BAD_DATA                            = (0x80310016, "The data is not valid."),
        FVE_E_VOLUME_NOT_BOUND                    = (0x80310017, "The data drive specified is not set to automatically unlock on the current computer and cannot be unlocked automatically."),
        FVE_E_TPM_NOT_OWNED                       = (0x80310018, "You must initialize the Trusted Platform Module (TPM) before you can use BitLocker Drive Encryption."),
        FVE_E_NOT_DATA_VOLUME                     = (0x80310019, "The operation attempted cannot be performed on an operating system drive."),
        FVE_E_AD_INSUFFICIENT_BUFFER              = (0x8031001A, "The buffer supplied to a function was insufficient to contain the returned data. Increase the buffer size before running the function again."),
        FVE_E_CONV_READ                           = (0x8031001B, "A read operation failed while converting the drive. The drive was not converted. Please re-enable BitLocker."),
        FVE_E_CONV_WRITE                          = (0x8031001C, "A write operation failed while converting the drive. The drive was not converted. Please re-enable BitLocker."),
        FVE_E_KEY_REQUIRED                        = (0x8031001D, "One or more BitLocker key protectors are required. You cannot delete the last key on this drive."),
        FVE_E_CLUSTERING_NOT_SUPPORTED            = (0x8031001E, "Cluster configurations are not supported by BitLocker Drive Encryption."),
        FVE_E_VOLUME_BOUND_ALREADY                = (0x8031001F, "The drive specified is already configured to be automatically unlocked on the current computer."),
        FVE_E_OS_NOT_PROTECTED                    = (0x80310020, "The operating system drive is not protected by BitLocker Drive Encryption."),
        FVE_E_PROTECTION_DISABLED                 = (0x80310021, "BitLocker Drive Encryption has been suspended on this drive. All BitLocker key protectors configured for this drive are effectively disabled, and the drive will be automatically unlocked using an unencrypted (clear) key."),
        FVE_E_RECOVERY_KEY_REQUIRED               = (0x80310022, "The drive you are attempting to lock does not have any key protectors available for encryption because BitLocker protection is currently suspended. Re-enable BitLocker to lock this drive."),
        FVE_E_FOREIGN_VOLUME                      = (0x80310023, "BitLocker cannot use the Trusted Platform Module (TPM) to protect a data drive. TPM protection can only be used with the operating system drive."),
        FVE_E_OVERLAPPED_UPDATE                   = (0x80310024, "The BitLocker metadata for the encrypted drive cannot be updated because it was locked for updating by another process. Please try this process again."),
        FVE_E_TPM_SRK_AUTH_NOT_ZERO               = (0x80310025, "The authorization data for the storage root key (SRK) of the Trusted Platform Module (TPM) is not zero and is therefore incompatible with BitLocker. Please initialize the TPM before attempting to use it with BitLocker."),
        FVE_E_FAILED_SECTOR_SIZE                  = (0x80310026, "The drive encryption algorithm cannot be used on this sector size."),
        FVE_E_FAILED_AUTHENTICATION               = (0x80310027, "The drive cannot be unlocked with the key provided. Confirm that you have provided the correct key and try again."),
        FVE_E_NOT_OS_VOLUME                       = (0x80310028, "The drive specified is not the operating system drive."),
        FVE_E_AUTOUNLOCK_ENABLED                  = (0x80310029, "BitLocker Drive Encryption cannot be turned off on the operating system drive until the auto unlock feature has been disabled for the fixed data drives and removable data drives associated with this computer."),
        FVE_E_WRONG_BOOTSECTOR                    = (0x8031002A, "The system partition boot sector does not perform Trusted Platform Module (TPM) measurements. Use the Bootrec.exe tool in the Windows Recovery Environment to update or repair the boot sector."),
        FVE_E_WRONG_SYSTEM_FS                     = (0x8031002B, "BitLocker Drive Encryption operating system drives must be formatted with the NTFS file system in order to be encrypted. Convert the drive to NTFS, and then turn on BitLocker."),
        FVE_E_POLICY_PASSWORD_REQUIRED            = (0x8031002C, "Group Policy settings require that a recovery password be specified before encrypting the drive."),
        FVE_E_CANNOT_SET_FVEK_ENCRYPTED           = (0x8031002D, "The drive encryption algorithm and key cannot be set on a previously encrypted drive. To encrypt this drive with BitLocker Drive Encryption, remove the previous encryption and then turn on BitLocker."),
        FVE_E_CANNOT_ENCRYPT_NO_KEY               = (0x8031002E, "BitLocker Drive Encryption cannot encrypt the specified drive because an encryption key is not available. Add a key protector to encrypt this drive."),
        FVE_E_BOOTABLE_CDDVD                      = (0x80310030, "BitLocker Drive Encryption detected bootable media (CD or DVD) in the computer. Remove the media and restart the computer before configuring BitLocker."),
        FVE_E_PROTECTOR_EXISTS                    = (0x80310031, "This key protector cannot be added. Only one key protector of this type is allowed for this drive."),
        FVE_E_RELATIVE_PATH                       = (0x80310032, "The recovery password file was not found because a relative path was specified. Recovery passwords must be saved to a fully qualified path. Environment variables configured on the computer can be used in the path."),
        FVE_E_PROTECTOR_NOT_FOUND                 = (0x80310033, "The specified key protector was not found on the drive. Try another key protector."),
        FVE_E_INVALID_KEY_FORMAT                  = (0x80310034, "The recovery key provided is corrupt and cannot be used to access the drive. An alternative recovery method, such as recovery password, a data recovery agent, or a backup version of the recovery key must be used to recover access to the drive."),
        FVE_E_INVALID_PASSWORD_FORMAT             = (0x80310035, "The format of the recovery password provided is invalid. BitLocker recovery passwords are 48 digits. Verify that the recovery password is in the correct format and then try again."),
        FVE_E_FIPS_RNG_CHECK_FAILED               = (0x80310036, "The random number generator check test failed."),
        FVE_E_FIPS_PREVENTS_RECOVERY_PASSWORD     = (0x80310037, "The Group Policy setting requiring FIPS compliance prevents a local recovery password from being generated or used by BitLocker Drive Encryption. When operating in FIPS-compliant mode, BitLocker recovery options can be either a recovery key stored on a USB drive or recovery through a data recovery agent."),
        FVE_E_FIPS_PREVENTS_EXTERNAL_KEY_EXPORT   = (0x80310038, "The Group Policy setting requiring FIPS compliance prevents the recovery password from being saved to Active Directory. When operating in FIPS-compliant mode, BitLocker recovery options can be either a recovery key stored on a USB drive or recovery through a data recovery agent. Check your Group Policy settings configuration."),
        FVE_E_NOT_DECRYPTED                       = (0x80310039, "The drive must be fully decrypted to complete this operation."),
        FVE_E_INVALID_PROTECTOR_TYPE              = (0x8031003A, "The key protector specified cannot be used for this operation."),
        FVE_E_NO_PROTECTORS_TO_TEST               = (0x8031003B, "No key protectors exist on the drive to perform the hardware test."),
        FVE_E_KEYFILE_NOT_FOUND                   = (0x8031003C, "The BitLocker startup key or recovery password cannot be found on the USB device. Verify that you have the correct USB device, that the USB device is plugged into the computer on an active USB port, restart the computer, and then try again. If the problem persists, contact the computer manufacturer for BIOS upgrade instructions."),
        FVE_E_KEYFILE_INVALID                     = (0x8031003D, "The BitLocker startup key or recovery password file provided is corrupt or invalid. Verify that you have the correct startup key or recovery password file and try again."),
        FVE_E_KEYFILE_NO_VMK                      = (0x8031003E, "The BitLocker encryption key cannot be obtained from the startup key or recovery password. Verify that you have the correct startup key or recovery password and try again."),
        FVE_E_TPM_DISABLED                        = (0x8031003F, "The Trusted Platform Module (TPM) is disabled. The TPM must be enabled, initialized, and have valid ownership before it can be used with BitLocker Drive Encryption."),
        FVE_E_NOT_ALLOWED_IN_SAFE_MODE            = (0x80310040, "The BitLocker configuration of the specified drive cannot be managed because this computer is currently operating in Safe Mode. While in Safe Mode, BitLocker Drive Encryption can only be used for recovery purposes."),
        FVE_E_TPM_INVALID_PCR                     = (0x80310041, "The Trusted Platform Module (TPM) was not able to unlock the drive because the system boot information has changed or a PIN was not provided correctly. Verify that the drive has not been tampered with and that changes to the system boot information were caused by a trusted source. After verifying that the drive is safe to access, use the BitLocker recovery console to unlock the drive and then suspend and resume BitLocker to update system boot information that BitLocker associates with this drive."),
        FVE_E_TPM_NO_VMK                          = (0x80310042, "The BitLocker encryption key cannot be obtained from the Trusted Platform Module (TPM)."),
        FVE_E_PIN_INVALID                         = (0x80310043, "The BitLocker encryption key cannot be obtained from the Trusted Platform Module (TPM) and PIN."),
        FVE_E_AUTH_INVALID_APPLICATION            = (0x80310044, "A boot application has changed since BitLocker Drive Encryption was enabled."),
        FVE_E_AUTH_INVALID_CONFIG                 = (0x80310045, "The Boot Configuration Data (BCD) settings have changed since BitLocker Drive Encryption was enabled."),
        FVE_E_FIPS_DISABLE_PROTECTION_NOT_ALLOWED = (0x80310046, "The Group Policy setting requiring FIPS compliance prohibits the use of unencrypted keys, which prevents BitLocker from being suspended on this drive. Please contact your domain administrator for more information."),
        FVE_E_FS_NOT_EXTENDED                     = (0x80310047, "This drive cannot be encrypted by BitLocker Drive Encryption because the file system does not extend to the end of the drive. Repartition this drive and then try again."),
        FVE_E_FIRMWARE_TYPE_NOT_SUPPORTED         = (0x80310048, "BitLocker Drive Encryption cannot be enabled on the operating system drive. Contact the computer manufacturer for BIOS upgrade instructions."),
        FVE_E_NO_LICENSE                          = (0x80310049, "This version of Windows does not include BitLocker Drive Encryption. To use BitLocker Drive Encryption, please upgrade the operating system."),
        FVE_E_NOT_ON_STACK                        = (0x8031004A, "BitLocker Drive Encryption cannot be used because critical BitLocker system files are missing or corrupted. Use Windows Startup Repair to restore these files to your computer."),
        FVE_E_FS_MOUNTED                          = (0x8031004B, "The drive cannot be locked when the drive is in use."),
        FVE_E_TOKEN_NOT_IMPERSONATED              = (0x8031004C, "The access token associated with the current thread is not an impersonated token."),
        FVE_E_DRY_RUN_FAILED                      = (0x8031004D, "The BitLocker encryption key cannot be obtained. Verify that the Trusted Platform Module (TPM) is enabled and ownership has been taken. If this computer does not have a TPM, verify that the USB drive is inserted and available."),
        FVE_E_REBOOT_REQUIRED                     = (0x8031004E, "You must restart your computer before continuing with BitLocker Drive Encryption."),
        FVE_E_DEBUGGER_ENABLED                    = (0x8031004F, "Drive encryption cannot occur while boot debugging is enabled. Use the bcdedit command-line tool to turn off boot debugging."),
        FVE_E_RAW_ACCESS                          = (0x80310050, "No action was taken as BitLocker Drive Encryption is in raw access mode."),
        FVE_E_RAW_BLOCKED                         = (0x80310051, "BitLocker Drive Encryption cannot enter raw access mode for this drive because the drive is currently in use."),
        FVE_E_BCD_APPLICATIONS_PATH_INCORRECT     = (0x80310052, "The path specified in the Boot Configuration Data (BCD) for a BitLocker Drive Encryption integrity-protected application is incorrect. Please verify and correct your BCD settings and try again."),
        FVE_E_NOT_ALLOWED_IN_VERSION              = (0x80310053, "BitLocker Drive Encryption can only be used for limited provisioning or recovery purposes when the computer is running in pre-installation or recovery environments."),
        FVE_E_NO_AUTOUNLOCK_MASTER_KEY            = (0x80310054, "The auto-unlock master key was not available from the operating system drive."),
        FVE_E_MOR_FAILED                          = (0x80310055, "The system firmware failed to enable clearing of system memory when the computer was restarted."),
        FVE_E_HIDDEN_VOLUME                       = (0x80310056, "The hidden drive cannot be encrypted."),
        FVE_E_TRANSIENT_STATE                     = (0x80310057, "BitLocker encryption keys were ignored because the drive was in a transient state."),
        FVE_E_PUBKEY_NOT_ALLOWED                  = (0x80310058, "Public key based protectors are not allowed on this drive."),
        FVE_E_VOLUME_HANDLE_OPEN                  = (0x80310059, "BitLocker Drive Encryption is already performing an operation on this drive. Please complete all operations before continuing."),
        FVE_E_NO_FEATURE_LICENSE                  = (0x8031005A, "This version of Windows does not support this feature of BitLocker Drive Encryption. To use this feature, upgrade the operating system."),
        FVE_E_INVALID_STARTUP_OPTIONS             = (0x8031005B, "The Group Policy settings for BitLocker startup options are in conflict and cannot be applied. Contact your system administrator for more information."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_FWP (50) - Windows Filtering Platform
    // -------------------------------------------------------------------------
    Facility::Fwp => {
        FWP_E_CALLOUT_NOT_FOUND                 = (0x80320001, "The callout does not exist."),
        FWP_E_CONDITION_NOT_FOUND               = (0x80320002, "The filter condition does not exist."),
        FWP_E_FILTER_NOT_FOUND                  = (0x80320003, "The filter does not exist."),
        FWP_E_LAYER_NOT_FOUND                   = (0x80320004, "The layer does not exist."),
        FWP_E_PROVIDER_NOT_FOUND                = (0x80320005, "The provider does not exist."),
        FWP_E_PROVIDER_CONTEXT_NOT_FOUND        = (0x80320006, "The provider context does not exist."),
        FWP_E_SUBLAYER_NOT_FOUND                = (0x80320007, "The sublayer does not exist."),
        FWP_E_NOT_FOUND                         = (0x80320008, "The object does not exist."),
        FWP_E_ALREADY_EXISTS                    = (0x80320009, "An object with that GUID or LUID already exists."),
        FWP_E_IN_USE                            = (0x8032000A, "The object is referenced by other objects and, therefore, cannot be deleted."),
        FWP_E_DYNAMIC_SESSION_IN_PROGRESS       = (0x8032000B, "The call is not allowed from within a dynamic session."),
        FWP_E_WRONG_SESSION                     = (0x8032000C, "The call was made from the wrong session and, therefore, cannot be completed."),
        FWP_E_NO_TXN_IN_PROGRESS                = (0x8032000D, "The call must be made from within an explicit transaction."),
        FWP_E_TXN_IN_PROGRESS                   = (0x8032000E, "The call is not allowed from within an explicit transaction."),
        FWP_E_TXN_ABORTED                       = (0x8032000F, "The explicit transaction has been forcibly canceled."),
        FWP_E_SESSION_ABORTED                   = (0x80320010, "The session has been canceled."),
        FWP_E_INCOMPATIBLE_TXN                  = (0x80320011, "The call is not allowed from within a read-only transaction."),
        FWP_E_TIMEOUT                           = (0x80320012, "The call timed out while waiting to acquire the transaction lock."),
        FWP_E_NET_EVENTS_DISABLED               = (0x80320013, "Collection of network diagnostic events is disabled."),
        FWP_E_INCOMPATIBLE_LAYER                = (0x80320014, "The operation is not supported by the specified layer."),
        FWP_E_KM_CLIENTS_ONLY                   = (0x80320015, "The call is allowed for kernel-mode callers only."),
        FWP_E_LIFETIME_MISMATCH                 = (0x80320016, "The call tried to associate two objects with incompatible lifetimes."),
        FWP_E_BUILTIN_OBJECT                    = (0x80320017, "The object is built in and, therefore, cannot be deleted."),
        FWP_E_TOO_MANY_CALLOUTS                 = (0x80320018, "The maximum number of callouts has been reached."),
        FWP_E_NOTIFICATION_DROPPED              = (0x80320019, "A notification could not be delivered because a message queue is at its maximum capacity."),
        FWP_E_TRAFFIC_MISMATCH                  = (0x8032001A, "The traffic parameters do not match those for the security association context."),
        FWP_E_INCOMPATIBLE_SA_STATE             = (0x8032001B, "The call is not allowed for the current security association state."),
        FWP_E_NULL_POINTER                      = (0x8032001C, "A required pointer is null."),
        FWP_E_INVALID_ENUMERATOR                = (0x8032001D, "An enumerator is not valid."),
        FWP_E_INVALID_FLAGS                     = (0x8032001E, "The flags field contains an invalid value."),
        FWP_E_INVALID_NET_MASK                  = (0x8032001F, "A network mask is not valid."),
        FWP_E_INVALID_RANGE                     = (0x80320020, "An FWP_RANGE is not valid."),
        FWP_E_INVALID_INTERVAL                  = (0x80320021, "The time interval is not valid."),
        FWP_E_ZERO_LENGTH_ARRAY                 = (0x80320022, "An array that must contain at least one element has a zero length."),
        FWP_E_NULL_DISPLAY_NAME                 = (0x80320023, "The displayData.name field cannot be null."),
        FWP_E_INVALID_ACTION_TYPE               = (0x80320024, "The action type is not one of the allowed action types for a filter."),
        FWP_E_INVALID_WEIGHT                    = (0x80320025, "The filter weight is not valid."),
        FWP_E_MATCH_TYPE_MISMATCH               = (0x80320026, "A filter condition contains a match type that is not compatible with the operands."),
        FWP_E_TYPE_MISMATCH                     = (0x80320027, "An FWP_VALUE or FWPM_CONDITION_VALUE is of the wrong type."),
        FWP_E_OUT_OF_BOUNDS                     = (0x80320028, "An integer value is outside the allowed range."),
        FWP_E_RESERVED                          = (0x80320029, "A reserved field is nonzero."),
        FWP_E_DUPLICATE_CONDITION               = (0x8032002A, "A filter cannot contain multiple conditions operating on a single field."),
        FWP_E_DUPLICATE_KEYMOD                  = (0x8032002B, "A policy cannot contain the same keying module more than once."),
        FWP_E_ACTION_INCOMPATIBLE_WITH_LAYER    = (0x8032002C, "The action type is not compatible with the layer."),
        FWP_E_ACTION_INCOMPATIBLE_WITH_SUBLAYER = (0x8032002D, "The action type is not compatible with the sublayer."),
        FWP_E_CONTEXT_INCOMPATIBLE_WITH_LAYER   = (0x8032002E, "The raw context or the provider context is not compatible with the layer."),
        FWP_E_CONTEXT_INCOMPATIBLE_WITH_CALLOUT = (0x8032002F, "The raw context or the provider context is not compatible with the callout."),
        FWP_E_INCOMPATIBLE_AUTH_METHOD          = (0x80320030, "The authentication method is not compatible with the policy type."),
        FWP_E_INCOMPATIBLE_DH_GROUP             = (0x80320031, "The Diffie-Hellman group is not compatible with the policy type."),
        FWP_E_EM_NOT_SUPPORTED                  = (0x80320032, "An Internet Key Exchange (IKE) policy cannot contain an Extended Mode policy."),
        FWP_E_NEVER_MATCH                       = (0x80320033, "The enumeration template or subscription will never match any objects."),
        FWP_E_PROVIDER_CONTEXT_MISMATCH         = (0x80320034, "The provider context is of the wrong type."),
        FWP_E_INVALID_PARAMETER                 = (0x80320035, "The parameter is incorrect."),
        FWP_E_TOO_MANY_SUBLAYERS                = (0x80320036, "The maximum number of sublayers has been reached."),
        FWP_E_CALLOUT_NOTIFICATION_FAILED       = (0x80320037, "The notification function for a callout returned an error."),
        FWP_E_INVALID_AUTH_TRANSFORM            = (0x80320038, "The IPsec authentication transform is not valid."),
        FWP_E_INVALID_CIPHER_TRANSFORM          = (0x80320039, "The IPsec cipher transform is not valid."),
        FWP_E_DROP_NOICMP                       = (0x80320104, "The packet should be dropped, no ICMP should be sent."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_WINRM (51) - WS-Management
    // -------------------------------------------------------------------------
    Facility::WinRm => {
        ERROR_WSMAN_RESOURCE_NOT_FOUND                                = (0x80338000, "The WS-Management service cannot process the request. The service cannot find the resource identified by the resource URI and selectors."),
        ERROR_WSMAN_INVALID_ACTIONURI                                 = (0x80338001, "The WS-Management service cannot process the request because the WS-Addressing Action URI in the request is not compatible with the resource."),
        ERROR_WSMAN_INVALID_URI                                       = (0x80338002, "The WS-Management service cannot process the request because the resource URI is not valid."),
        ERROR_WSMAN_PROVIDER_FAILURE                                  = (0x80338003, "The WS-Management service cannot process the request because the provider reported a failure."),
        ERROR_WSMAN_ENUMERATION_CLOSED                                = (0x80338004, "The WS-Management service cannot complete the operation because the enumeration context is no longer valid."),
        ERROR_WSMAN_SUBSCRIPTION_CLOSED                               = (0x80338005, "The WS-Management service cannot complete the operation because the subscription has been closed."),
        ERROR_WSMAN_SUBSCRIPTION_CLOSE_IN_PROGRESS                    = (0x80338006, "The WS-Management service cannot complete the operation because the subscription is being closed."),
        ERROR_WSMAN_SUBSCRIPTION_CLIENT_DID_NOT_CALL_WITHIN_HEARTBEAT = (0x80338007, "The WS-Management service cannot complete the operation because the client did not request events within the heartbeat interval."),
        ERROR_WSMAN_SUBSCRIPTION_NO_HEARTBEAT                         = (0x80338008, "The WS-Management service cannot complete the operation because the subscription has no heartbeat."),
        ERROR_WSMAN_UNSUPPORTED_TIMEOUT                               = (0x80338009, "The WS-Management service cannot process the request because the timeout header is not supported."),
        ERROR_WSMAN_SOAP_VERSION_MISMATCH                             = (0x8033800A, "The WS-Management service cannot process the request because the SOAP version of the message is not supported."),
        ERROR_WSMAN_SOAP_DATA_ENCODING_UNKNOWN                        = (0x8033800B, "The WS-Management service cannot process the request because the data encoding of the message is not recognized."),
        ERROR_WSMAN_INVALID_MESSAGE_INFORMATION_HEADER                = (0x8033800C, "The WS-Management service cannot process the request because a message information header is not valid."),
        ERROR_WSMAN_SOAP_FAULT_MUST_UNDERSTAND                        = (0x8033800D, "The WS-Management service cannot process the request because a header marked as mandatory was not understood."),
        ERROR_WSMAN_MESSAGE_INFORMATION_HEADER_REQUIRED               = (0x8033800E, "The WS-Management service cannot process the request because a required message information header is missing."),
        ERROR_WSMAN_DESTINATION_UNREACHABLE                           = (0x8033800F, "The WS-Management service cannot process the request because the destination is unreachable."),
        ERROR_WSMAN_ACTION_NOT_SUPPORTED                              = (0x80338010, "The WS-Management service cannot process the request because the action is not supported by the service."),
        ERROR_WSMAN_ENDPOINT_UNAVAILABLE                              = (0x80338011, "The WS-Management service cannot process the request because the endpoint is unavailable."),
        ERROR_WSMAN_INVALID_REPRESENTATION                            = (0x80338012, "The WS-Management service cannot process the request because the representation in the request is not valid for the resource."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_NDIS (52) - Network driver interface
    // -------------------------------------------------------------------------
    Facility::Ndis => {
        ERROR_NDIS_INTERFACE_CLOSING         = (0x80340002, "The binding to the network interface is being closed."),
        ERROR_NDIS_BAD_VERSION               = (0x80340004, "An invalid version was specified."),
        ERROR_NDIS_BAD_CHARACTERISTICS       = (0x80340005, "An invalid characteristics table was used."),
        ERROR_NDIS_ADAPTER_NOT_FOUND         = (0x80340006, "Failed to find the network interface, or the network interface is not ready."),
        ERROR_NDIS_OPEN_FAILED               = (0x80340007, "Failed to open the network interface."),
        ERROR_NDIS_DEVICE_FAILED             = (0x80340008, "The network interface has encountered an internal unrecoverable failure."),
        ERROR_NDIS_MULTICAST_FULL            = (0x80340009, "The multicast list on the network interface is full."),
        ERROR_NDIS_MULTICAST_EXISTS          = (0x8034000A, "An attempt was made to add a duplicate multicast address to the list."),
        ERROR_NDIS_MULTICAST_NOT_FOUND       = (0x8034000B, "At attempt was made to remove a multicast address that was never added."),
        ERROR_NDIS_REQUEST_ABORTED           = (0x8034000C, "The network interface aborted the request."),
        ERROR_NDIS_RESET_IN_PROGRESS         = (0x8034000D, "The network interface cannot process the request because it is being reset."),
        ERROR_NDIS_INVALID_PACKET            = (0x8034000F, "An attempt was made to send an invalid packet on a network interface."),
        ERROR_NDIS_INVALID_DEVICE_REQUEST    = (0x80340010, "The specified request is not a valid operation for the target device."),
        ERROR_NDIS_ADAPTER_NOT_READY         = (0x80340011, "The network interface is not ready to complete this operation."),
        ERROR_NDIS_INVALID_LENGTH            = (0x80340014, "The length of the buffer submitted for this operation is not valid."),
        ERROR_NDIS_INVALID_DATA              = (0x80340015, "The data used for this operation is not valid."),
        ERROR_NDIS_BUFFER_TOO_SHORT          = (0x80340016, "The length of the buffer submitted for this operation is too small."),
        ERROR_NDIS_INVALID_OID               = (0x80340017, "The network interface does not support this OID."),
        ERROR_NDIS_ADAPTER_REMOVED           = (0x80340018, "The network interface has been removed."),
        ERROR_NDIS_UNSUPPORTED_MEDIA         = (0x80340019, "The network interface does not support this media type."),
        ERROR_NDIS_GROUP_ADDRESS_IN_USE      = (0x8034001A, "An attempt was made to remove a token ring group address that is in use by other components."),
        ERROR_NDIS_FILE_NOT_FOUND            = (0x8034001B, "An attempt was made to map a file that cannot be found."),
        ERROR_NDIS_ERROR_READING_FILE        = (0x8034001C, "An error occurred while NDIS tried to map the file."),
        ERROR_NDIS_ALREADY_MAPPED            = (0x8034001D, "An attempt was made to map a file that is already mapped."),
        ERROR_NDIS_RESOURCE_CONFLICT         = (0x8034001E, "An attempt to allocate a hardware resource failed because the resource is used by another component."),
        ERROR_NDIS_MEDIA_DISCONNECTED        = (0x8034001F, "The I/O operation failed because the network media is disconnected or the wireless access point is out of range."),
        ERROR_NDIS_INVALID_ADDRESS           = (0x80340022, "The network address used in the request is invalid."),
        ERROR_NDIS_PAUSED                    = (0x8034002A, "The offload operation on the network interface has been paused."),
        ERROR_NDIS_INTERFACE_NOT_FOUND       = (0x8034002B, "The network interface was not found."),
        ERROR_NDIS_UNSUPPORTED_REVISION      = (0x8034002C, "The revision number specified in the structure is not supported."),
        ERROR_NDIS_INVALID_PORT              = (0x8034002D, "The specified port does not exist on this network interface."),
        ERROR_NDIS_INVALID_PORT_STATE        = (0x8034002E, "The current state of the specified port on this network interface does not support the requested operation."),
        ERROR_NDIS_NOT_SUPPORTED             = (0x803400BB, "The network interface does not support this request."),
        ERROR_NDIS_DOT11_AUTO_CONFIG_ENABLED = (0x80342000, "The wireless local area network (LAN) interface is in auto-configuration mode and does not support the requested parameter change operation."),
        ERROR_NDIS_DOT11_MEDIA_IN_USE        = (0x80342001, "The wireless LAN interface is busy and cannot perform the requested operation."),
        ERROR_NDIS_DOT11_POWER_STATE_INVALID = (0x80342002, "The wireless LAN interface is shutting down and does not support the requested operation."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_USERMODE_VOLMGR (56) - Volume manager
    // -------------------------------------------------------------------------
    Facility::VolumeManager => {
        ERROR_VOLMGR_INCOMPLETE_REGENERATION   = (0x80380001, "The regeneration operation was not able to copy all data from the active plexes due to bad sectors."),
        ERROR_VOLMGR_INCOMPLETE_DISK_MIGRATION = (0x80380002, "One or more disks were not fully migrated to the target pack. They may reappear after a restart."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_BCD (57) - Boot configuration data
    // -------------------------------------------------------------------------
    Facility::Bcd => {
        ERROR_BCD_NOT_ALL_ENTRIES_IMPORTED     = (0x80390001, "Some BCD entries were not imported correctly from the BCD store."),
        ERROR_BCD_NOT_ALL_ENTRIES_SYNCHRONIZED = (0x80390003, "Some BCD entries were not synchronized correctly with the firmware."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_USERMODE_VHD (58) - Virtual hard disks
    // -------------------------------------------------------------------------
    Facility::Vhd => {
        ERROR_QUERY_STORAGE_ERROR = (0x803A0001, "The virtualization storage subsystem has generated an error."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_SDIAG (60) - Scripted diagnostics
    // -------------------------------------------------------------------------
    Facility::Sdiag => {
        SDIAG_S_CANNOTRUN   = (0x003C0105, "The troubleshooting pack cannot be executed on this system."),
        SDIAG_E_CANCELLED   = (0x803C0100, "The operation was canceled."),
        SDIAG_E_SCRIPT      = (0x803C0101, "An error occurred when running a PowerShell script."),
        SDIAG_E_POWERSHELL  = (0x803C0102, "An error occurred when interacting with PowerShell runtime."),
        SDIAG_E_MANAGEDHOST = (0x803C0103, "An error occurred in the Scripted Diagnostic Managed Host."),
        SDIAG_E_NOVERIFIER  = (0x803C0104, "The troubleshooting pack does not contain a required verifier to complete the verification."),
        SDIAG_E_DISABLED    = (0x803C0106, "Scripted diagnostics is disabled by group policy."),
        SDIAG_E_TRUST       = (0x803C0107, "Trust validation of the troubleshooting pack failed."),
        SDIAG_E_CANNOTRUN   = (0x803C0108, "The troubleshooting pack cannot be executed on this system."),
        SDIAG_E_VERSION     = (0x803C0109, "This version of the troubleshooting pack is not supported."),
        SDIAG_E_RESOURCE    = (0x803C010A, "A required resource cannot be loaded."),
        SDIAG_E_ROOTCAUSE   = (0x803C010B, "The troubleshooting pack reported information for a root cause without adding the root cause."),
    }

    // -------------------------------------------------------------------------
    // FACILITY_WEBSERVICES (61) - Windows Web Services
    // -------------------------------------------------------------------------
    Facility::WebServices => {
        WS_S_ASYNC                          = (0x003D0000, "The function call is completing asynchronously."),
        WS_S_END                            = (0x003D0001, "There are no more messages available on the channel."),
        WS_E_INVALID_FORMAT                 = (0x803D0000, "The input data was not in the expected format or did not have the expected value."),
        WS_E_OBJECT_FAULTED                 = (0x803D0001, "The operation could not be completed because the object is in a faulted state due to a previous error."),
        WS_E_NUMERIC_OVERFLOW               = (0x803D0002, "The operation could not be completed because it would lead to numeric overflow."),
        WS_E_INVALID_OPERATION              = (0x803D0003, "The operation is not allowed due to the current state of the object."),
        WS_E_OPERATION_ABORTED              = (0x803D0004, "The operation was aborted."),
        WS_E_ENDPOINT_ACCESS_DENIED         = (0x803D0005, "Access was denied by the remote endpoint."),
        WS_E_OPERATION_TIMED_OUT            = (0x803D0006, "The operation did not complete within the time allotted."),
        WS_E_OPERATION_ABANDONED            = (0x803D0007, "The operation was abandoned."),
        WS_E_QUOTA_EXCEEDED                 = (0x803D0008, "A quota was exceeded."),
        WS_E_NO_TRANSLATION_AVAILABLE       = (0x803D0009, "The information was not available in the specified language."),
        WS_E_SECURITY_VERIFICATION_FAILURE  = (0x803D000A, "Security verification was not successful for the received data."),
        WS_E_ADDRESS_IN_USE                 = (0x803D000B, "The address is already being used."),
        WS_E_ADDRESS_NOT_AVAILABLE          = (0x803D000C, "The address is not valid for this context."),
        WS_E_ENDPOINT_NOT_FOUND             = (0x803D000D, "The remote endpoint does not exist or could not be located."),
        WS_E_ENDPOINT_NOT_AVAILABLE         = (0x803D000E, "The remote endpoint is not currently in service at this location."),
        WS_E_ENDPOINT_FAILURE               = (0x803D000F, "The remote endpoint could not process the request."),
        WS_E_ENDPOINT_UNREACHABLE           = (0x803D0010, "The remote endpoint was not reachable."),
        WS_E_ENDPOINT_ACTION_NOT_SUPPORTED  = (0x803D0011, "The operation was not supported by the remote endpoint."),
        WS_E_ENDPOINT_TOO_BUSY              = (0x803D0012, "The remote endpoint is unable to process the request due to being overloaded."),
        WS_E_ENDPOINT_FAULT_RECEIVED        = (0x803D0013, "A message containing a fault was received from the remote endpoint."),
        WS_E_ENDPOINT_DISCONNECTED          = (0x803D0014, "The connection with the remote endpoint was terminated."),
        WS_E_PROXY_FAILURE                  = (0x803D0015, "The HTTP proxy server could not process the request."),
        WS_E_PROXY_ACCESS_DENIED            = (0x803D0016, "Access was denied by the HTTP proxy server."),
        WS_E_NOT_SUPPORTED                  = (0x803D0017, "The requested feature is not available on this platform."),
        WS_E_PROXY_REQUIRES_BASIC_AUTH      = (0x803D0018, "The HTTP proxy server requires HTTP authentication scheme 'basic'."),
        WS_E_PROXY_REQUIRES_DIGEST_AUTH     = (0x803D0019, "The HTTP proxy server requires HTTP authentication scheme 'digest'."),
        WS_E_PROXY_REQUIRES_NTLM_AUTH       = (0x803D001A, "The HTTP proxy server requires HTTP authentication scheme 'NTLM'."),
        WS_E_PROXY_REQUIRES_NEGOTIATE_AUTH  = (0x803D001B, "The HTTP proxy server requires HTTP authentication scheme 'negotiate'."),
        WS_E_SERVER_REQUIRES_BASIC_AUTH     = (0x803D001C, "The remote endpoint requires HTTP authentication scheme 'basic'."),
        WS_E_SERVER_REQUIRES_DIGEST_AUTH    = (0x803D001D, "The remote endpoint requires HTTP authentication scheme 'digest'."),
        WS_E_SERVER_REQUIRES_NTLM_AUTH      = (0x803D001E, "The remote endpoint requires HTTP authentication scheme 'NTLM'."),
        WS_E_SERVER_REQUIRES_NEGOTIATE_AUTH = (0x803D001F, "The remote endpoint requires HTTP authentication scheme 'negotiate'."),
        WS_E_INVALID_ENDPOINT_URL           = (0x803D0020, "The endpoint address URL is invalid."),
        WS_E_OTHER                          = (0x803D0021, "Unrecognized error occurred in the Windows Web Services framework."),
        WS_E_SECURITY_TOKEN_EXPIRED         = (0x803D0022, "A security token was rejected by the server because it has expired."),
        WS_E_SECURITY_SYSTEM_FAILURE        = (0x803D0023, "A security operation failed in the Windows Web Services framework."),
    }
}

// -----------------------------------------------------------------------------
// Aliases - secondary names for codes already declared above
// -----------------------------------------------------------------------------
// Header range markers (`*_FIRST`) and renamed constants. Name lookup only.
define_hresult_aliases! {
    DATA_E_FORMATETC     => DV_E_FORMATETC,
    E_DRAW               => VIEW_E_DRAW,
    VIEW_E_FIRST         => VIEW_E_DRAW,
    OLE_E_FIRST          => OLE_E_OLEVERB,
    OLE_S_FIRST          => OLE_S_USEREG,
    DRAGDROP_E_FIRST     => DRAGDROP_E_NOTREGISTERED,
    DRAGDROP_S_FIRST     => DRAGDROP_S_DROP,
    CLASSFACTORY_E_FIRST => CLASS_E_NOAGGREGATION,
    REGDB_E_FIRST        => REGDB_E_READREGDB,
    CACHE_E_FIRST        => CACHE_E_NOCACHE_UPDATED,
    CACHE_S_FIRST        => CACHE_S_FORMATETC_NOTSUPPORTED,
    OLEOBJ_E_FIRST       => OLEOBJ_E_NOVERBS,
    INPLACE_E_FIRST      => INPLACE_E_NOTUNDOABLE,
    CONVERT10_E_FIRST    => CONVERT10_E_OLESTREAM_GET,
    CLIPBRD_E_FIRST      => CLIPBRD_E_CANT_OPEN,
    MK_E_FIRST           => MK_E_CONNECTMANUALLY,
    CO_E_FIRST           => CO_E_NOTINITIALIZED,
    DATA_S_FIRST         => DATA_S_SAMEFORMATETC,
    XACT_E_FIRST         => XACT_E_ALREADYOTHERSINGLEPHASE,
    SEC_E_NOT_SUPPORTED  => SEC_E_UNSUPPORTED_FUNCTION,
    SEC_E_NO_SPM         => SEC_E_INTERNAL_ERROR,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HResultEntry, Severity};
    use std::collections::HashSet;

    /// Every declared entry is reachable through the generated dispatch, and
    /// reaches itself rather than a copy.
    #[test]
    fn dispatch_covers_catalog() {
        for entry in CATALOG {
            let found = lookup_code(entry.code())
                .unwrap_or_else(|| panic!("{} is not dispatched", entry.name()));
            assert!(std::ptr::eq(found, *entry), "{} dispatches elsewhere", entry.name());
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut seen = HashSet::new();
        for entry in CATALOG {
            assert!(seen.insert(entry.code()), "duplicate code {:#010X}", entry.code());
        }
    }

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for entry in CATALOG {
            assert!(seen.insert(entry.name()), "duplicate name {}", entry.name());
        }
    }

    #[test]
    fn success_is_reserved() {
        assert!(CATALOG.iter().all(|e| e.code() != 0));
        assert!(lookup_code(0).is_none());
    }

    /// Informational codes must be named as such. The converse does not hold:
    /// `RPC_S_CALLPENDING` carries the failure bit.
    #[test]
    fn success_severity_names_are_informational() {
        for entry in CATALOG.iter().filter(|e| e.severity() == Severity::Success) {
            assert!(
                entry.name().contains("_S_") || entry.name().contains("_I_"),
                "{} has success severity but a failure name",
                entry.name()
            );
        }
    }

    /// Entries are grouped by facility and ascend within each group.
    #[test]
    fn codes_ascend_within_facility_blocks() {
        for pair in CATALOG.windows(2) {
            let (a, b): (&HResultEntry, &HResultEntry) = (pair[0], pair[1]);
            if a.facility() == b.facility() {
                assert!(a.code() < b.code(), "{} is out of order after {}", b.name(), a.name());
            }
        }
    }

    /// A named `Facility` variant with nothing declared under it is a gap in
    /// the catalog, not a facility.
    #[test]
    fn named_facilities_have_entries() {
        let declared: HashSet<Facility> = CATALOG.iter().map(|e| e.facility()).collect();

        for raw in 0u16..0x800 {
            let facility = Facility::from_code(raw);
            if facility.name().is_some() {
                assert!(declared.contains(&facility), "{} has no entries", facility);
            } else {
                assert!(!declared.contains(&facility), "{} is declared but unnamed", facility);
            }
        }
    }

    #[test]
    fn descriptions_are_present() {
        for entry in CATALOG {
            assert!(!entry.description().trim().is_empty(), "{} has no description", entry.name());
        }
    }

    #[test]
    fn aliases_point_into_catalog() {
        let names: HashSet<_> = CATALOG.iter().map(|e| e.name()).collect();
        let mut alias_names = HashSet::new();

        for (alias, target) in ALIASES {
            assert!(!names.contains(alias), "alias {} shadows an entry", alias);
            assert!(alias_names.insert(*alias), "alias {} declared twice", alias);
            assert!(
                CATALOG.iter().any(|e| std::ptr::eq(*e, *target)),
                "alias {} targets an entry outside the catalog",
                alias
            );
        }
    }

    #[test]
    fn validate_well_known_entries() {
        assert_eq!(E_FAIL.code(), 0x8000_4005);
        assert_eq!(E_FAIL.description(), "Unspecified error.");
        assert_eq!(E_INVALIDARG.code(), 0x8007_0057);
        assert_eq!(E_INVALIDARG.description(), "One or more arguments are invalid.");
        assert_eq!(E_OUTOFMEMORY.code(), 0x8007_000E);
        assert_eq!(REGDB_E_CLASSNOTREG.code(), 0x8004_0154);
        assert_eq!(RPC_E_SERVER_DIED.code(), 0x8001_0007);
        assert_eq!(CO_E_OBJNOTCONNECTED.code(), 0x8004_01FD);
        assert!(std::ptr::eq(DATA_E_FORMATETC, &DV_E_FORMATETC));

        assert_eq!(SCARD_E_NO_SMARTCARD.code(), 0x8010_000C);
        assert_eq!(CRYPT_E_MSG_ERROR.facility(), Facility::Security);
        assert_eq!(TPM_E_AUTHFAIL.description(), "Authentication failed.");
        assert_eq!(BG_S_PARTIAL_COMPLETE.severity(), Severity::Success);
        assert_eq!(HTTP_E_STATUS_NOT_FOUND.code(), 0x8019_0194);
    }
}
