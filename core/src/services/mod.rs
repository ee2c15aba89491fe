//! Business services containing domain logic and use cases.

pub mod auth;
pub mod credentials;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use credentials::{CredentialService, RegistrationData};
pub use otp::{DeliveryContext, MailTemplate, NotifierTrait, OtpService, OtpStoreTrait};
pub use token::TokenService;
