/// Formats a whole Rupiah amount the way Indonesian receipts print it,
/// e.g. `Rp 10.000.000`.
pub fn format_rupiah(amount: u64) -> String {
	let digits = amount.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

	for (i, digit) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push('.');
		}
		grouped.push(digit);
	}

	format!("Rp {grouped}")
}
