pub mod echo;

/// How a handled input was treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to run; the user was asked for code.
    Prompted,
    /// The code was echoed back as simulated output.
    Echoed,
}

/// What a handler hands back for one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub verdict: Verdict,
}

/// Turns the submitted code into the text shown to the user.
/// Implementations must be pure: same input, same response.
pub trait Handler: Send + Sync {
    fn name(&self) -> &str;
    fn handle(&self, input: &str) -> Response;
}
