//! Result list and toggle bar formatting.

use std::fmt::Write;

use juso_core::{AddressRecord, DisplayField, SearchResultDisplay};

/// Shown instead of an empty list.
pub const EMPTY_RESULTS: &str = "검색 결과가 없습니다.";

/// Example keywords shown under [`EMPTY_RESULTS`].
pub const EMPTY_RESULTS_HINT: &str = "(검색어 예시: 강남대로, 자양동, 초성 검색 가능)";

const ZIP_LABEL: &str = "우편번호";

/// Korean label for a toggleable address form.
pub const fn field_label(field: DisplayField) -> &'static str {
    match field {
        DisplayField::Eng => "영문주소",
        DisplayField::Road => "도로명주소",
        DisplayField::Legacy => "지번주소",
    }
}

/// Render a result list.
///
/// Each entry is headed by its road-name address. The postal code is always
/// shown; the other forms follow `display`, in the order road, legacy,
/// English.
pub fn render_address_list(records: &[AddressRecord], display: &SearchResultDisplay) -> String {
    if records.is_empty() {
        return format!("{EMPTY_RESULTS}\n{EMPTY_RESULTS_HINT}\n");
    }

    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i + 1, record.road_addr);
        let _ = writeln!(out, "    {ZIP_LABEL}: {}", record.zip_no);
        for (field, value) in [
            (DisplayField::Road, &record.road_addr),
            (DisplayField::Legacy, &record.jibun_addr),
            (DisplayField::Eng, &record.eng_addr),
        ] {
            if display.get(field) {
                let _ = writeln!(out, "    {}: {value}", field_label(field));
            }
        }
    }
    out
}

/// Render the toggle bar, e.g. `[x] 영문주소  [x] 도로명주소  [ ] 지번주소`.
pub fn render_toggles(display: &SearchResultDisplay) -> String {
    [DisplayField::Eng, DisplayField::Road, DisplayField::Legacy]
        .into_iter()
        .map(|field| {
            let mark = if display.get(field) { 'x' } else { ' ' };
            format!("[{mark}] {}", field_label(field))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AddressRecord {
        AddressRecord::new(
            "06232",
            "서울특별시 강남구 강남대로 382",
            "서울특별시 강남구 역삼동 825",
            "382 Gangnam-daero, Gangnam-gu, Seoul",
        )
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let out = render_address_list(&[], &SearchResultDisplay::default());
        assert!(out.contains(EMPTY_RESULTS));
        assert!(out.contains("강남대로, 자양동"));
    }

    #[test]
    fn test_default_toggles() {
        let out = render_address_list(&[record()], &SearchResultDisplay::default());

        assert!(out.starts_with("[1] 서울특별시 강남구 강남대로 382\n"));
        assert!(out.contains("우편번호: 06232"));
        assert!(out.contains("도로명주소: 서울특별시 강남구 강남대로 382"));
        assert!(out.contains("지번주소: 서울특별시 강남구 역삼동 825"));
        assert!(!out.contains("영문주소"));
    }

    #[test]
    fn test_zip_is_shown_with_everything_off() {
        let display = SearchResultDisplay {
            show_eng: false,
            show_road: false,
            show_legacy: false,
        };
        let out = render_address_list(&[record()], &display);

        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("우편번호: 06232"));
    }

    #[test]
    fn test_field_order() {
        let display = SearchResultDisplay {
            show_eng: true,
            show_road: true,
            show_legacy: true,
        };
        let out = render_address_list(&[record(), record()], &display);

        let road = out.find("도로명주소").unwrap();
        let legacy = out.find("지번주소").unwrap();
        let eng = out.find("영문주소").unwrap();
        assert!(road < legacy && legacy < eng);
        assert!(out.contains("[2] "));
    }

    #[test]
    fn test_render_toggles() {
        assert_eq!(
            render_toggles(&SearchResultDisplay::default()),
            "[ ] 영문주소  [x] 도로명주소  [x] 지번주소"
        );
    }
}
