use regex::Regex;
use std::sync::LazyLock;

/// Field labels that OCR / column merging tends to glue onto the preceding
/// value. Only repaired when the label is followed by a colon, which is how
/// these labels appear in the known layouts.
static GLUED_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Za-z0-9])(CERTIFICATE NO|MANUFACTURER|EQUIPMENT|MODEL NO|SERIAL NO|CALIBRATION DATE|NEXT CALIBRATION DATE|ACCEPTANCE CRITERIA|ACCURACY|LOCATION|RANGE|REMARKS)(\s*:)",
    )
    .unwrap()
});

/// A certificate-number shaped token whose trailing digit group may carry
/// OCR letter/digit confusions.
static CERT_DIGIT_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{2,4}-[A-Z]{2}-)([0-9OISB]{5})\b").unwrap());

/// Normalize raw page text into a single-line, whitespace-collapsed string.
///
/// Line-break sequences become single spaces, whitespace runs collapse to
/// one space, and a fixed set of field labels glued to preceding text is
/// re-separated. When `from_ocr` is set, a small set of digit-group
/// character fixes is applied, scoped to certificate-number shaped tokens
/// only so alphabetic content is never touched.
///
/// Never fails; empty input yields empty output.
pub fn normalize(raw: &str, from_ocr: bool) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return collapsed;
    }

    let spaced = GLUED_LABEL
        .replace_all(&collapsed, "${1} ${2}${3}")
        .into_owned();

    if from_ocr {
        fix_cert_digit_groups(&spaced)
    } else {
        spaced
    }
}

/// Replace letter/digit confusions inside the digit group of a recognized
/// certificate-number token: O->0, I->1, S->5, B->8.
fn fix_cert_digit_groups(text: &str) -> String {
    CERT_DIGIT_GROUP
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let digits: String = caps[2]
                .chars()
                .map(|c| match c {
                    'O' => '0',
                    'I' => '1',
                    'S' => '5',
                    'B' => '8',
                    other => other,
                })
                .collect();
            format!("{}{}", &caps[1], digits)
        })
        .into_owned()
}
