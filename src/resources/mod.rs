//! Typed handles for the SmartFile resource families.
//!
//! | Handle          | Template             | Operations                          |
//! |-----------------|----------------------|-------------------------------------|
//! | [`UserApi`]     | `user/{id}/`         | create, read, update, delete, list  |
//! | [`RoleApi`]     | `role/{id}/`         | create, read, update, delete, list  |
//! | [`PathTreeApi`] | `path/tree/{path}/`  | read                                |
//! | [`PathDataApi`] | `path/{id}/data/`    | create (upload), read (stream)      |
//! | [`PathOperApi`] | `path/oper/`         | remove, move, copy, poll            |
//! | [`PathApi`]     | composite            | read, download, upload, remove, ... |
//!
//! Each handle wraps a [`ResourceEndpoint`](crate::rest::ResourceEndpoint)
//! and exposes only the operations its family supports.

mod operation;
mod path;
mod path_data;
mod path_oper;
mod path_tree;
mod role;
mod user;

pub use operation::{
    OperationHandle, OperationPoller, OperationStatus, STATUS_SUCCESS,
};
pub use path::PathApi;
pub use path_data::{PathDataApi, PATH_DATA_TEMPLATE};
pub use path_oper::{PathOperApi, PATH_OPER_TEMPLATE};
pub use path_tree::{PathTreeApi, PATH_TREE_TEMPLATE};
pub use role::{RoleApi, ROLE_TEMPLATE};
pub use user::{UserApi, USER_TEMPLATE};
