mod common;

use chrono::{NaiveDate, NaiveDateTime};
use common::{
    PngSpec, png_bytes, png_bytes_with, setup_test_db, temp_out, write_png, write_test_logo,
};
use flate2::read::ZlibDecoder;
use rworkhours::config::Config;
use rworkhours::core::add::AddLogic;
use rworkhours::core::calculator::compute_overtime;
use rworkhours::core::employee::EmployeeLogic;
use rworkhours::core::report::ReportLogic;
use rworkhours::db::pool::DbPool;
use rworkhours::errors::AppError;
use rworkhours::models::employee::Employee;
use rworkhours::models::overtime::{MonthlyOvertime, OvertimeRecord};
use rworkhours::report::logo::{MAX_LOGO_SIDE, decode_png};
use rworkhours::report::pdf::to_win_ansi;
use rworkhours::report::{build_pdf, default_file_name, render_pdf};
use std::fs;
use std::io::Read;
use std::path::Path;

fn inflate(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .expect("valid zlib stream");
    out
}

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid timestamp")
}

fn march(records: usize) -> MonthlyOvertime {
    let start = ts("2024-03-01 18:00");
    let end = ts("2024-03-01 19:30");
    let hours_extra = compute_overtime(start, end, 0).expect("valid interval");

    let records: Vec<OvertimeRecord> = (0..records)
        .map(|i| OvertimeRecord {
            id: i as i64 + 1,
            employee_id: 1,
            employee_name: "João".into(),
            start,
            end,
            break_minutes: 0,
            note: format!("record {}", i + 1),
            created_at: String::new(),
            hours_extra,
        })
        .collect();

    MonthlyOvertime {
        month: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        employee: Some(Employee {
            id: 1,
            name: "João".into(),
        }),
        total_minutes: 90 * records.len() as i64,
        records,
    }
}

#[test]
fn test_decode_rgba_splits_alpha() {
    let scanlines = [
        0, 10, 20, 30, 255, 40, 50, 60, 128, //
        0, 70, 80, 90, 0, 100, 110, 120, 64,
    ];
    let logo = decode_png(&png_bytes(2, 2, 6, &scanlines)).unwrap();

    assert_eq!((logo.width, logo.height), (2, 2));
    assert!(!logo.grayscale);
    assert_eq!(
        inflate(&logo.color),
        vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120]
    );
    assert_eq!(inflate(&logo.alpha.expect("alpha plane")), vec![255, 128, 0, 64]);
}

#[test]
fn test_decode_reverses_scanline_filters() {
    // 2x2 RGB: row 0 uses Sub, row 1 uses Up
    let scanlines = [
        1, 10, 20, 30, 5, 5, 5, //
        2, 1, 1, 1, 1, 1, 1,
    ];
    let logo = decode_png(&png_bytes(2, 2, 2, &scanlines)).unwrap();

    assert!(logo.alpha.is_none());
    assert_eq!(
        inflate(&logo.color),
        vec![10, 20, 30, 15, 25, 35, 11, 21, 31, 16, 26, 36]
    );
}

#[test]
fn test_decode_grayscale_average_and_paeth() {
    // 2x2 gray: row 0 unfiltered, row 1 Average then Paeth on the same bytes
    let scanlines = [
        0, 100, 200, //
        3, 10, 10,
    ];
    let logo = decode_png(&png_bytes(2, 2, 0, &scanlines)).unwrap();
    assert!(logo.grayscale);
    // row 1: x0 = 10 + (0 + 100) / 2 = 60, x1 = 10 + (60 + 200) / 2 = 140
    assert_eq!(inflate(&logo.color), vec![100, 200, 60, 140]);

    let scanlines = [
        0, 100, 200, //
        4, 0, 0,
    ];
    let logo = decode_png(&png_bytes(2, 2, 0, &scanlines)).unwrap();
    // Paeth: x0 picks b = 100; x1 with a=100, b=200, c=100 picks b = 200
    assert_eq!(inflate(&logo.color), vec![100, 200, 100, 200]);
}

fn palette_logo(trns: Option<&[u8]>) -> Vec<u8> {
    let plte: &[u8] = &[255, 0, 0, 0, 0, 255];
    let extra: Vec<(&[u8; 4], &[u8])> = match trns {
        Some(t) => vec![(b"PLTE", plte), (b"tRNS", t)],
        None => vec![(b"PLTE", plte)],
    };
    png_bytes_with(
        &PngSpec {
            width: 2,
            height: 1,
            bit_depth: 8,
            color_type: 3,
            interlaced: false,
            extra: &extra,
        },
        &[0, 0, 1],
    )
}

#[test]
fn test_decode_expands_palette() {
    let logo = decode_png(&palette_logo(None)).unwrap();

    assert!(!logo.grayscale);
    assert!(logo.alpha.is_none());
    assert_eq!(inflate(&logo.color), vec![255, 0, 0, 0, 0, 255]);
}

#[test]
fn test_decode_palette_transparency_becomes_alpha() {
    let logo = decode_png(&palette_logo(Some(&[128]))).unwrap();

    assert_eq!(inflate(&logo.color), vec![255, 0, 0, 0, 0, 255]);
    // entries past the tRNS list are opaque
    assert_eq!(inflate(&logo.alpha.expect("alpha plane")), vec![128, 255]);
}

#[test]
fn test_decode_sixteen_bit_keeps_high_byte() {
    let bytes = png_bytes_with(
        &PngSpec {
            width: 1,
            height: 1,
            bit_depth: 16,
            color_type: 0,
            interlaced: false,
            extra: &[],
        },
        &[0, 0xAB, 0xCD],
    );
    let logo = decode_png(&bytes).unwrap();

    assert!(logo.grayscale);
    assert_eq!(inflate(&logo.color), vec![0xAB]);
}

#[test]
fn test_decode_interlaced() {
    // a 1x1 Adam7 image has a single pass holding its only pixel
    let bytes = png_bytes_with(
        &PngSpec {
            width: 1,
            height: 1,
            bit_depth: 8,
            color_type: 2,
            interlaced: true,
            extra: &[],
        },
        &[0, 1, 2, 3],
    );
    let logo = decode_png(&bytes).unwrap();

    assert_eq!((logo.width, logo.height), (1, 1));
    assert_eq!(inflate(&logo.color), vec![1, 2, 3]);
}

#[test]
fn test_decode_rejects_non_png() {
    assert!(decode_png(b"GIF89a not a png").is_err());
}

#[test]
fn test_decode_rejects_oversized_header_without_allocating() {
    let huge = png_bytes(200_000, 200_000, 6, &[0; 5]);
    assert!(decode_png(&huge).is_err());

    let wide = png_bytes(MAX_LOGO_SIDE + 1, 1, 0, &[0, 0]);
    assert!(decode_png(&wide).is_err());
}

#[test]
fn test_decode_rejects_truncated_image_data() {
    // header says 4x4 RGB, data holds a single row
    let short = png_bytes(4, 4, 2, &[0; 13]);
    assert!(decode_png(&short).is_err());
}

#[test]
fn test_report_renders_with_palette_logo() {
    let logo = write_png("report_palette_logo", &palette_logo(Some(&[0, 255])));
    let out = temp_out("report_palette_logo", "pdf");

    render_pdf(&march(2), Path::new(&logo), Path::new(&out)).unwrap();

    let bytes = std::fs::read(&out).expect("report written");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_report_has_one_page_for_few_records() {
    let logo = write_test_logo("report_single_page");
    let doc = build_pdf(&march(2), Path::new(&logo)).unwrap();

    assert_eq!(doc.page_count(), 1);
    assert!(doc.finish().starts_with(b"%PDF"));
}

#[test]
fn test_report_paginates_many_records() {
    let logo = write_test_logo("report_paginated");
    let doc = build_pdf(&march(40), Path::new(&logo)).unwrap();

    assert!(doc.page_count() > 1);
}

#[test]
fn test_render_writes_pdf_file() {
    let logo = write_test_logo("report_render");
    let out = temp_out("report_render", "pdf");

    render_pdf(&march(3), Path::new(&logo), Path::new(&out)).unwrap();

    let bytes = std::fs::read(&out).expect("report written");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_without_logo_is_an_asset_error() {
    let missing = temp_out("report_no_logo_asset", "png");
    let out = temp_out("report_no_logo", "pdf");

    let err = render_pdf(&march(1), Path::new(&missing), Path::new(&out)).unwrap_err();

    assert!(matches!(err, AppError::Asset(_)));
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_default_file_name_has_employee_and_month() {
    assert_eq!(default_file_name(&march(0)), "overtime_report_1_2024-03.pdf");

    let mut other = march(0);
    other.employee = Some(Employee {
        id: 2,
        name: "Bruno".into(),
    });
    assert_eq!(default_file_name(&other), "overtime_report_2_2024-03.pdf");

    other.employee = None;
    assert_eq!(default_file_name(&other), "overtime_report_2024-03.pdf");
}

#[test]
fn test_win_ansi_keeps_latin1() {
    assert_eq!(to_win_ansi("João"), vec![b'J', b'o', 0xE3, b'o']);
    assert_eq!(to_win_ansi("3 → 4"), b"3 ? 4".to_vec());
}

#[test]
fn test_default_reports_of_two_employees_do_not_collide() {
    let db_path = setup_test_db("report_two_employees");
    let pool = DbPool::open(&db_path).unwrap();

    let report_dir = std::env::temp_dir().join("rworkhours_report_two_employees");
    fs::remove_dir_all(&report_dir).ok();
    fs::create_dir_all(&report_dir).unwrap();

    let cfg = Config {
        database: db_path.clone(),
        logo_path: write_test_logo("report_two_employees"),
        report_dir: report_dir.to_string_lossy().to_string(),
    };

    let month = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let mut paths = Vec::new();
    for name in ["Ana", "Bruno"] {
        let id = EmployeeLogic::register(&pool, name).unwrap();
        let (start, end) = (ts("2024-03-05 18:00"), ts("2024-03-05 20:00"));
        AddLogic::apply(&pool, id, start, end, 0, "").unwrap();
        paths.push(ReportLogic::generate(&pool, &cfg, id, month, None, None).unwrap());
    }

    assert_ne!(paths[0], paths[1]);
    assert!(paths.iter().all(|p| p.starts_with(&report_dir) && p.exists()));
}
