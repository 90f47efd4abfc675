use pwhash::bcrypt;

pub fn hash(password: &str) -> Result<String, pwhash::error::Error> {
    bcrypt::hash(password)
}

pub fn verify(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hashed = hash("hunter2").unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(verify("hunter2", &hashed));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hashed = hash("hunter2").unwrap();
        assert!(!verify("hunter3", &hashed));
    }
}
