//! Resolution services orchestrating the domain layer.

pub mod dispatcher;
pub mod resolver;

pub use dispatcher::RouteDispatcher;
pub use resolver::TenantResolver;
