pub mod songlink_server;
