//! 장비 렌탈/구매 의사결정 계산 모듈 모음.

pub mod depreciation;
pub mod rent_vs_buy;
pub mod roi;

pub use rent_vs_buy::*;
pub use roi::*;
