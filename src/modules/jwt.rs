use chrono::Utc;
use jsonwebtoken::{encode, Header, EncodingKey};
use std::env;
use crate::schemas::{
    user::User,
    claims::Claims
};

pub fn jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string())
}

pub fn generate_jwt(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user.email.clone(),
        uid: user.id,
        iss: "shortlist-api".to_string(),
        exp: (Utc::now() + chrono::Duration::hours(1)).timestamp() as usize,
    };

    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(jwt_secret().as_ref()))?;
    Ok(token)
}
