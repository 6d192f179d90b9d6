//! pt-BR number formatting used by stat cards and tables.

/// Groups thousands with `.`: `1234567` -> `"1.234.567"`.
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats cents as BRL: `123456` -> `"R$ 1.234,56"`.
pub fn format_money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = (abs / 100) as usize;
    format!("{}R$ {},{:02}", sign, format_count(reais), abs % 100)
}

/// Formats a whole-number percentage: `20` -> `"20%"`.
pub fn format_percent(value: u8) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "R$ 0,00");
        assert_eq!(format_money(2_999), "R$ 29,99");
        assert_eq!(format_money(123_456), "R$ 1.234,56");
        assert_eq!(format_money(-5_000), "-R$ 50,00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(15), "15%");
    }
}
