// User registration by email. No authentication; the email is the identity.

pub mod handlers;
