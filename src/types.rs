use mousegram_core::layout::Hover;

/// Offset of the tooltip from the pointer, in CSS px.
const TOOLTIP_OFFSET: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub page_x: f64,
    pub page_y: f64,
    pub minute: f64,
    pub female: f64,
    pub male: f64,
}

impl TooltipState {
    pub fn new(page_x: f64, page_y: f64, hover: &Hover) -> Self {
        Self {
            page_x,
            page_y,
            minute: hover.minute,
            female: hover.sample.female,
            male: hover.sample.male,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "display: block; left: {}px; top: {}px",
            self.page_x + TOOLTIP_OFFSET,
            self.page_y + TOOLTIP_OFFSET
        )
    }

    pub fn minute_label(&self) -> String {
        format!("{:.0}", self.minute)
    }
}

/// One decimal, or a dash for a missing reading.
pub fn format_reading(value: f64) -> String {
    if value.is_nan() { "–".to_string() } else { format!("{value:.1}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mousegram_core::Sample;

    fn hover() -> Hover {
        Hover { minute: 1234.0, px: 55.0, sample: Sample { minute: 1234, female: 37.06, male: f64::NAN } }
    }

    #[test]
    fn test_tooltip_sits_below_right_of_pointer() {
        let t = TooltipState::new(100.0, 200.0, &hover());
        assert_eq!(t.style(), "display: block; left: 112px; top: 212px");
        assert_eq!(t.minute_label(), "1234");
    }

    #[test]
    fn test_readings_use_one_decimal() {
        let t = TooltipState::new(0.0, 0.0, &hover());
        assert_eq!(format_reading(t.female), "37.1");
        assert_eq!(format_reading(t.male), "–");
        assert_eq!(format_reading(0.0), "0.0");
    }
}
