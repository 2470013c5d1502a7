use calpart_calendar::{CalendarError, Date, month_starts};

#[test]
fn month_offset_clamps_every_month_end() {
    // Adding one month to each month's last day lands on the next month's
    // last day or earlier, never spilling into the month after.
    for month in 1..=12_u32 {
        let start = Date::new(2016, month, 1).unwrap();
        let last = start.first_of_next_month().unwrap().add_days(-1).unwrap();
        let shifted = last.add_months(1).unwrap();
        let expected_month = month % 12 + 1;
        assert_eq!(
            shifted.month(),
            expected_month,
            "{last} + 1 month gave {shifted}"
        );
    }
}

#[test]
fn boundaries_span_exact_month_lengths() {
    let starts = month_starts(Date::new(2016, 1, 1).unwrap(), 12).unwrap();
    let lengths: Vec<i64> = starts.windows(2).map(|w| w[0].days_until(w[1])).collect();
    assert_eq!(
        lengths,
        vec![31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    );
}

#[test]
fn weekly_steps_cover_a_year() {
    let start = Date::new(2016, 1, 4).unwrap();
    let after = start.add_days(52 * 7).unwrap();
    assert_eq!(after, Date::new(2017, 1, 2).unwrap());
    assert_eq!(start.days_until(after), 364);
}

#[test]
fn parse_rejects_garbage() {
    for input in ["", "2016", "2016-00-10", "2016-01-32", "04/01/2016"] {
        assert!(
            matches!(input.parse::<Date>(), Err(CalendarError::Parse { .. })),
            "expected parse failure for {input:?}"
        );
    }
}

#[test]
fn parse_display_agree() {
    let date: Date = "1999-12-31".parse().unwrap();
    assert_eq!(date.to_string(), "1999-12-31");
    assert_eq!(date.first_of_next_month().unwrap().to_string(), "2000-01-01");
}
