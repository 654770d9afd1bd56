// SPDX-License-Identifier: AGPL-3.0-or-later

//! Uniform success envelope.

use serde::Serialize;

/// Success wrapper returned by every operation: `{ "data": <payload> }`.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    pub data: T,
}

/// Wrap a payload in the success envelope.
pub fn success_response<T>(data: T) -> SuccessResponse<T> {
    SuccessResponse { data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Balance;

    #[test]
    fn envelope_wraps_payload_under_data() {
        let response = success_response(Balance { balance: 2.5 });
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"data":{"balance":2.5}}"#);
    }
}
