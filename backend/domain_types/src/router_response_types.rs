use rust_decimal::Decimal;

#[derive(Clone, Debug)]
pub struct Response {
    /// headers
    pub headers: Option<http::HeaderMap>,
    /// response
    pub response: bytes::Bytes,
    /// status code
    pub status_code: u16,
}

/// Financing terms of an installment payment, as stored alongside the order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FinancingInformation {
    pub payment_id: String,
    pub fee_amount: Decimal,
    pub total_cost: Decimal,
    pub term: u32,
    pub monthly_payment: Decimal,
}
