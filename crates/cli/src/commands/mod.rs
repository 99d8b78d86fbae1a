pub mod articles;
pub mod init;
pub mod serve;
pub mod sitemap;
