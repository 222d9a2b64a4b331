/// 다루는 환산 항목 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 렌탈 청구 기간 (시간/일/주/개월)
    Duration,
    /// 렌탈 요율 (원/h, 원/일, 원/주, 원/월)
    RentalRate,
}
