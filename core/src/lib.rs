pub mod config;
pub mod csv;
pub mod drive;
pub mod momaiz;
pub mod rank;
pub mod rules;

pub use config::PageConfig;
pub use momaiz::MomaizItem;
pub use rank::RankModel;
