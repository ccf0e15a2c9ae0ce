mod test_utils;

pub use test_utils::{FakeSteam, rate_line};
