mod common;
pub use self::common::{ApiRequest, BuiltRequest, Query};

mod report;
pub use self::report::ReportQuery;

mod market;
pub use self::market::{MarketPayload, MarketQuery, MARKET_TYPE};
