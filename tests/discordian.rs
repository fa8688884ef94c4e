//! Integration tests for the Discordian conversion and the template
//! interpreter, driven through the public crate surface.

use chrono::{Datelike, Local, NaiveDate};
use ddate::{DateInput, DdateError, DiscordianDate, DEFAULT_TEMPLATE};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn convert(year: i32, month: u32, day: u32) -> DiscordianDate {
    DiscordianDate::from_gregorian(ymd(year, month, day))
}

#[test]
fn defaults_to_the_current_date() {
    let now = Local::now().date_naive();
    let ddate = DiscordianDate::new(DateInput::Today).unwrap();
    assert_eq!(ddate.gregorian().year(), now.year());
    assert_eq!(ddate.gregorian().month(), now.month());
    assert_eq!(ddate.gregorian().day(), now.day());
    assert_eq!(DiscordianDate::today().gregorian(), now);
}

#[test]
fn works_when_given_a_date_string() {
    let ddate = DiscordianDate::new("August 9, 2013").unwrap();
    assert_eq!(ddate.gregorian(), ymd(2013, 8, 9));

    let iso = DiscordianDate::new("2013-08-09").unwrap();
    assert_eq!(iso, ddate);

    let suffixed = DiscordianDate::new("August 9th, 2013").unwrap();
    assert_eq!(suffixed, ddate);
}

#[test]
fn propagates_parse_failures() {
    let err = DiscordianDate::new("fnord").unwrap_err();
    assert_eq!(
        err,
        DdateError::UnrecognizedDate {
            input: "fnord".to_string()
        }
    );
}

#[test]
fn replaces_every_directive() {
    let ddate = convert(2013, 4, 12);
    assert_eq!(ddate.format("%A"), "Boomtime");
    assert_eq!(ddate.format("%A %A"), "Boomtime Boomtime");
    assert_eq!(ddate.format("%a%a"), "BTBT");
    assert_eq!(ddate.format("%B"), "Discord");
    assert_eq!(ddate.format("%b %b"), "Dsc Dsc");
    assert_eq!(ddate.format("%d%d"), "2929");
    assert_eq!(ddate.format("%e %e"), "29th 29th");
    assert_eq!(ddate.format("%n%n"), "\n\n");
    assert_eq!(ddate.format("%t %t"), "\t \t");
    assert_eq!(ddate.format("%Y%Y"), "31793179");
}

#[test]
fn handles_complex_format_strings() {
    let ddate = convert(2013, 4, 12);
    assert_eq!(
        ddate.format("%A %a%B%b%d%e%n%t%Y"),
        "Boomtime BTDiscordDsc2929th\n\t3179"
    );
}

#[test]
fn drops_unrecognized_directives_silently() {
    let ddate = convert(2013, 4, 12);
    assert_eq!(ddate.format("%z"), "");
    assert_eq!(ddate.format("x%zy"), "xy");
    assert_eq!(ddate.format("abc%"), "abc");
}

#[test]
fn display_applies_the_default_template() {
    let ddate = convert(2013, 4, 12);
    assert_eq!(ddate.to_string(), ddate.format(DEFAULT_TEMPLATE));
    assert_eq!(format!("{}", ddate), "Boomtime Discord 29th, YOLD 3179");
}

#[test]
fn returns_the_correct_day_across_2013() {
    let expected = [12, 43, 71, 29, 59, 17, 47, 5, 36, 66, 24, 54];
    for (index, want) in expected.into_iter().enumerate() {
        let ddate = convert(2013, index as u32 + 1, 12);
        assert_eq!(ddate.day(), want, "month {}", index + 1);
    }
}

#[test]
fn adds_endings_to_the_day() {
    let expected = [
        "12th", "43rd", "71st", "29th", "59th", "17th", "47th", "5th", "36th", "66th", "24th",
        "54th",
    ];
    for (index, want) in expected.into_iter().enumerate() {
        let ddate = convert(2013, index as u32 + 1, 12);
        assert_eq!(ddate.day_ordinal(), want, "month {}", index + 1);
    }
}

#[test]
fn weekday_cycles_through_the_whole_year() {
    let cycle = ["SM", "BT", "PD", "PP", "SO"];
    let longs = [
        "Sweetmorn",
        "Boomtime",
        "Pungenday",
        "Prickle-Prickle",
        "Setting Orange",
    ];
    let start = ymd(2013, 1, 1);
    for offset in 0..365u64 {
        let ddate = DiscordianDate::from_gregorian(start + chrono::Days::new(offset));
        assert_eq!(ddate.weekday(false), cycle[(offset % 5) as usize]);
        assert_eq!(ddate.weekday(true), longs[(offset % 5) as usize]);
    }
}

#[test]
fn seasons_partition_the_year() {
    // Every day except December 31 falls in one of the five seasons, and
    // season * 73 + day reassembles the day-of-year.
    let start = ymd(2013, 1, 1);
    let mut seen = Vec::new();
    for offset in 0..364u64 {
        let ddate = DiscordianDate::from_gregorian(start + chrono::Days::new(offset));
        let season = ddate.season(true).unwrap();
        if !seen.contains(&season) {
            seen.push(season);
        }
        let index = seen.iter().position(|s| *s == season).unwrap() as u32;
        assert_eq!(index * 73 + ddate.day(), ddate.day_of_year());
    }
    assert_eq!(
        seen,
        vec!["Chaos", "Discord", "Confusion", "Bureaucracy", "The Aftermath"]
    );
}

#[test]
fn season_boundaries_land_on_multiples_of_73() {
    // Day 73 (March 14 in a non-leap year) opens Discord with day 0.
    let ddate = convert(2013, 3, 14);
    assert_eq!(ddate.day_of_year(), 73);
    assert_eq!(ddate.season(true), Some("Discord"));
    assert_eq!(ddate.day(), 0);

    let before = convert(2013, 3, 13);
    assert_eq!(before.season(true), Some("Chaos"));
    assert_eq!(before.day(), 72);
}

#[test]
fn the_last_day_of_the_year_has_no_season() {
    let non_leap = convert(2013, 12, 31);
    assert_eq!(non_leap.day_of_year(), 365);
    assert_eq!(non_leap.season(true), None);
    assert_eq!(non_leap.format("%B%b"), "");
    assert_eq!(non_leap.format("%A/%d"), "Setting Orange/0");

    let leap = convert(2012, 12, 31);
    assert_eq!(leap.day_of_year(), 366);
    assert_eq!(leap.season(false), None);
    assert_eq!(leap.format("%B%b"), "");
    assert_eq!(leap.day(), 1);
}

#[test]
fn yold_offset_holds_for_all_years() {
    assert_eq!(convert(2013, 4, 12).year(), 3179);
    assert_eq!(convert(1, 1, 1).year(), 1167);
    assert_eq!(convert(0, 1, 1).year(), 1166);
    assert_eq!(convert(-1166, 7, 5).year(), 0);
    assert_eq!(convert(-2000, 7, 5).year(), -834);
}

#[test]
fn conversions_are_pure_and_repeatable() {
    let ddate = convert(2013, 4, 12);
    let again = ddate;
    assert_eq!(ddate.format(DEFAULT_TEMPLATE), again.format(DEFAULT_TEMPLATE));
    assert_eq!(ddate.day(), again.day());
    assert_eq!(ddate.season(false), again.season(false));
    assert_eq!(ddate.weekday(false), again.weekday(false));
    assert_eq!(ddate.year(), again.year());
}
