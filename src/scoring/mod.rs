pub mod client;
pub mod credentials;
pub mod protocol;
pub mod session;

pub use self::client::{RunMode, ScoringClient, DEFAULT_API_BASE};
pub use self::credentials::{CredentialProvider, EnvToken, NoCredential, StaticToken};
pub use self::protocol::{
    Application, Headline, IndexSet, IndexTransition, ScoringRequest, ScoringResponse,
};
pub use self::session::{user_message, RunState, RunTicket, ScoringSession};
