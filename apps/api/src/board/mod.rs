// Job board core: filter → sort → paginate over the static catalog, plus skill matching
// share helpers and skills assessment scoring. Everything here is synchronous and pure except the handlers.

pub mod assessment;
pub mod controller;
pub mod filter;
pub mod handlers;
pub mod matching;
pub mod pagination;
pub mod parsing;
pub mod sharing;
pub mod sorter;
