#[cfg(test)]
mod tests {
    use crate::masking::{mask_name, mask_phone};

    #[test]
    fn name_masking_keeps_first_and_last() {
        assert_eq!(mask_name("Kim"), "K*m");
        assert_eq!(mask_name("Jinsoo"), "J****o");
    }

    #[test]
    fn short_names_have_special_cases() {
        assert_eq!(mask_name("Ko"), "K*");
        assert_eq!(mask_name("A"), "A");
        assert_eq!(mask_name(""), "");
    }

    #[test]
    fn name_masking_counts_characters_not_bytes() {
        // Hangul: 3 characters, 9 bytes
        assert_eq!(mask_name("김민수"), "김*수");
        assert_eq!(mask_name("김민"), "김*");
        assert_eq!(mask_name("김"), "김");
    }

    #[test]
    fn phone_masking_keeps_last_three() {
        assert_eq!(mask_phone("01012345678"), "********678");
        assert_eq!(mask_phone("0212345"), "****345");
    }

    #[test]
    fn short_phones_stay_unchanged() {
        assert_eq!(mask_phone("123"), "123");
        assert_eq!(mask_phone("123456"), "123456");
        assert_eq!(mask_phone(""), "");
    }
}
