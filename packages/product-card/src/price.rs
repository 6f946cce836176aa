//! Currency and count formatting with thousands grouping.

use separator::Separatable;

use crate::config::Currency;

/// Format `amount` as a price in `currency`, grouping thousands with `,`.
///
/// Rounding works on the shortest decimal form of the float (the digits
/// `{}` prints), half away from zero, so `1234.995` in dollars becomes
/// `$1,235.00` and `1.005` becomes `$1.01`. Large amounts keep every digit
/// of that form; nothing saturates.
///
/// ```rust
/// use product_card::{format_price, Currency};
///
/// assert_eq!(format_price(12345.0, &Currency::default()), "$12,345.00");
/// ```
pub fn format_price(amount: f64, currency: &Currency) -> String {
    let amount = if amount.is_finite() {
        amount
    } else {
        tracing::warn!(%amount, "non-finite price, rendering as zero");
        0.0
    };

    let decimals = usize::from(currency.decimals);
    let (whole, fraction) = round_to_decimals(&amount.abs().to_string(), decimals);
    let is_zero = whole.bytes().chain(fraction.bytes()).all(|digit| digit == b'0');

    let mut out = String::new();
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&currency.symbol);
    out.push_str(&group_thousands(&whole));
    if decimals > 0 {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Round a plain non-negative decimal string (`"1234.995"`) to `decimals`
/// fraction digits, half away from zero. Returns the integer and fraction
/// digits separately; the fraction is exactly `decimals` long.
fn round_to_decimals(plain: &str, decimals: usize) -> (String, String) {
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain, ""));

    let mut digits: Vec<u8> = whole.bytes().collect();
    let kept = fraction.len().min(decimals);
    digits.extend_from_slice(&fraction.as_bytes()[..kept]);
    digits.resize(whole.len() + decimals, b'0');

    let rounds_up = fraction.as_bytes().get(decimals).is_some_and(|&next| next >= b'5');
    if rounds_up && !carry_one(&mut digits) {
        digits.insert(0, b'1');
    }

    let split = digits.len() - decimals;
    let fraction = digits.split_off(split);
    // Only ASCII digits ever enter `digits`.
    let into_string = |bytes: Vec<u8>| bytes.into_iter().map(char::from).collect::<String>();
    (into_string(digits), into_string(fraction))
}

/// Add one to a big-endian ASCII digit string in place. Returns `false` when
/// the carry runs off the front (`"999"` becomes `"000"`).
fn carry_one(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

/// Insert `,` between every group of three digits, counting from the right.
/// Works on digit strings of any length, beyond what integer types hold.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Format a review count with thousands grouping.
pub fn format_count(count: u32) -> String {
    count.separated_string()
}
