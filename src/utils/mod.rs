pub mod init_routes;
pub mod session;
