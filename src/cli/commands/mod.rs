mod check;
mod init;
mod list;
mod show;

pub use check::cmd_check;
pub use init::cmd_init;
pub use list::cmd_list;
pub use show::cmd_show;
