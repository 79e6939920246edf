/// Classification for retry policy.
///
/// | Class | Worth retrying later? |
/// |-------|-----------------------|
/// | `Never` | No, the request or configuration is wrong |
/// | `WithBackoff` | Yes, the outage is probably transient |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad token, malformed payload or configuration error.
    Never,

    /// Transient failure (rate limit, timeout, network). A later attempt may succeed.
    WithBackoff,
}

impl RetryClass {
    pub fn is_transient(self) -> bool {
        matches!(self, RetryClass::WithBackoff)
    }
}
