use rand::Rng;
use rand::distr::Alphanumeric;

/// Random alphanumeric password, used when seeding the first admin account.
pub fn generate_random_password(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Temporary password for staff/guardian accounts: 8 uppercase letters or
/// digits, matching what the secretariat prints on paper slips.
pub fn generate_temp_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::rng();
    (0..8)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Temporary password for student accounts: 8 digits.
pub fn generate_student_temp_password() -> String {
    let mut rng = rand::rng();
    (0..8)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// 6-digit password-reset code.
pub fn generate_reset_code() -> String {
    let mut rng = rand::rng();
    format!("{:06}", rng.random_range(0..1_000_000u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_password_shape() {
        let pw = generate_temp_password();
        assert_eq!(pw.len(), 8);
        assert!(pw.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn student_temp_password_is_numeric() {
        let pw = generate_student_temp_password();
        assert_eq!(pw.len(), 8);
        assert!(pw.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn reset_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_reset_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
