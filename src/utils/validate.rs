use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    // 密码长度校验：至少 6 个字符
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters long");
    }
    Ok(())
}

pub fn validate_class_name(class_name: &str) -> Result<(), &'static str> {
    if class_name.trim().len() < 3 {
        return Err("Class name must be at least 3 characters long");
    }
    Ok(())
}

pub fn validate_subject(subject: &str) -> Result<(), &'static str> {
    if subject.trim().len() < 2 {
        return Err("Subject must be at least 2 characters long");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("bob").is_ok());
        assert!(validate_username("teacher_42").is_ok());
        assert!(validate_username("mary-lou").is_ok());
    }

    #[test]
    fn test_short_username() {
        assert!(validate_username("ab").is_err());
    }

    #[test]
    fn test_username_with_invalid_chars() {
        assert!(validate_username("bad user").is_err());
        assert!(validate_username("naïve").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_class_name_minlength() {
        assert!(validate_class_name("CS").is_err());
        assert!(validate_class_name("  CS ").is_err());
        assert!(validate_class_name("CS 101").is_ok());
    }

    #[test]
    fn test_subject_minlength() {
        assert!(validate_subject("C").is_err());
        assert!(validate_subject("CS").is_ok());
    }
}
