use crate::domain::chips::Chips;

/// Денежный формат для HUD и стола: `$` + разделители тысяч, без копеек.
///
/// `format_money(Chips(1250))` → `"$1,250"`.
pub fn format_money(amount: Chips) -> String {
    let digits = amount.0.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');

    let lead = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (idx + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
