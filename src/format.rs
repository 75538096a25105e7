//! 통화 포맷
//! id-ID 로케일의 루피아 표기: "Rp" + 줄바꿈 없는 공백 + 점(.) 천 단위 구분, 소수점 없음.

const CURRENCY_SYMBOL: &str = "Rp";
const NBSP: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';

/// 루피아 금액 포맷
pub fn format_currency(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}{}{}", sign, CURRENCY_SYMBOL, NBSP, grouped)
}
