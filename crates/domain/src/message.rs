//! DNS message codec: query encoding and answer decoding for the resolver,
//! request parsing and response building for the nameserver.

mod address;
mod name;
pub mod query;
pub mod request;
pub mod response;

pub use address::{encode_address, format_address, format_ipv4, format_ipv6};
pub use name::{encode_name, split_labels, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use query::{
    build_query, build_query_with_id, parse_answers, parse_response, Answer, FIXED_TRANSACTION_ID,
};
pub use request::{parse_request, ParsedRequest};
pub use response::{build_response, encode_rdata};
