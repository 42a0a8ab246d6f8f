//! 班级加入码生成
//!
//! 6 位大写字母+数字（36^6 ≈ 2.18×10^9 种组合）。唯一性由存储层
//! 在创建班级时带上限地重试保证，见 `SeaOrmStorage::create_class_impl`。

use rand::Rng;

/// 加入码长度
pub const CLASS_CODE_LEN: usize = 6;

/// 加入码字符集
pub const CLASS_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// 唯一性重试上限。单次碰撞概率约为 已有班级数/36^6，
/// 连续碰撞 64 次意味着随机源退化，应当直接报错而不是继续转。
pub const CLASS_CODE_MAX_ATTEMPTS: u32 = 64;

/// 生成一个随机加入码（不保证未被占用）
pub fn generate_class_code() -> String {
    let mut rng = rand::rng();
    (0..CLASS_CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CLASS_CODE_ALPHABET.len());
            CLASS_CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        for _ in 0..100 {
            assert_eq!(generate_class_code().len(), CLASS_CODE_LEN);
        }
    }

    #[test]
    fn test_code_alphabet() {
        for _ in 0..100 {
            let code = generate_class_code();
            assert!(
                code.bytes().all(|b| CLASS_CODE_ALPHABET.contains(&b)),
                "unexpected character in code {code}"
            );
        }
    }

    #[test]
    fn test_codes_are_not_constant() {
        // 100 次抽样全部相同的概率可以忽略不计
        let first = generate_class_code();
        let all_same = (0..100).all(|_| generate_class_code() == first);
        assert!(!all_same);
    }

    #[test]
    fn test_code_is_uppercase() {
        let code = generate_class_code();
        assert_eq!(code, code.to_uppercase());
    }
}
