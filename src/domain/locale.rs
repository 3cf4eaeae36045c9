use crate::domain::{BookingError, BookingSummary, DisplayedPeriod, FormField};

/// Presentation text for the booking widget. Selection and pricing never
/// depend on it.
pub trait Locale {
    /// Month and year shown above the grid.
    fn month_title(&self, period: DisplayedPeriod) -> String;

    /// Column headers, Sunday first.
    fn weekday_labels(&self) -> [&'static str; 7];

    fn validation_message(&self, error: BookingError) -> &'static str;

    fn summary_heading(&self) -> &'static str;

    fn summary_lines(&self, summary: &BookingSummary) -> Vec<String>;

    fn confirm_label(&self) -> &'static str;

    fn field_label(&self, field: FormField) -> &'static str;

    fn format_amount(&self, amount: u64) -> String {
        group_thousands(amount, ',')
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(amount: u64, separator: char) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Offset from the Gregorian to the Buddhist-era year.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// `th-TH`, the only locale the site ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThaiLocale;

impl Locale for ThaiLocale {
    fn month_title(&self, period: DisplayedPeriod) -> String {
        format!(
            "{} {}",
            THAI_MONTHS[period.month() as usize],
            period.year() + BUDDHIST_ERA_OFFSET
        )
    }

    fn weekday_labels(&self) -> [&'static str; 7] {
        ["อา", "จ", "อ", "พ", "พฤ", "ศ", "ส"]
    }

    fn validation_message(&self, error: BookingError) -> &'static str {
        match error {
            BookingError::IncompleteSelection => "โปรดเลือกช่วงวันที่เข้าพักโดยคลิกในปฏิทิน",
            BookingError::InvalidRange => "วันที่เช็คเอาท์ต้องหลังจากวันที่เช็คอิน",
            BookingError::AmountOverflow => "ยอดเงินสูงเกินกว่าที่ระบบคำนวณได้",
        }
    }

    fn summary_heading(&self) -> &'static str {
        "สรุปรายการจอง"
    }

    fn summary_lines(&self, summary: &BookingSummary) -> Vec<String> {
        vec![
            format!("วันที่เข้าพัก: {}", summary.check_in.format("%Y-%m-%d")),
            format!("วันที่ออก: {}", summary.check_out.format("%Y-%m-%d")),
            format!("จำนวนคืน: {} คืน", summary.nights),
            format!("จำนวนผู้เข้าพัก: {} คน", summary.guests),
            format!("ราคาต่อคืน: {} บาท", self.format_amount(summary.price_per_night)),
            format!("ราคารวม: {} บาท", self.format_amount(summary.total)),
            format!(
                "มัดจำ ({}%): {} บาท",
                summary.deposit_percent,
                self.format_amount(summary.deposit)
            ),
            "หมายเหตุ: ราคาจริงอาจแตกต่างขึ้นอยู่กับช่วงเวลา".to_string(),
        ]
    }

    fn confirm_label(&self) -> &'static str {
        "ยืนยันการจอง"
    }

    fn field_label(&self, field: FormField) -> &'static str {
        match field {
            FormField::Guests => "จำนวนผู้เข้าพัก",
            FormField::Name => "ชื่อ",
            FormField::Phone => "เบอร์โทรศัพท์",
            FormField::Email => "อีเมล",
        }
    }
}
