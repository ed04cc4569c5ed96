//! Performance benchmarks for member validation.
//!
//! These benchmarks measure:
//! - Single-field validators (identifiers, phone, email)
//! - The full validation facade on valid and invalid payloads
//! - Registration through the service with a growing in-memory registry

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use member_registry::domain::{validate_email, validate_identifier, validate_phone};
use member_registry::repositories::{InMemoryMemberRepository, MemberRepository};
use member_registry::services::{MemberService, MemberServiceImpl};
use member_registry::{append_check_digits, validate_member, CreateMemberRequest, FixedClock, PersonType};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn request(index: usize) -> CreateMemberRequest {
    // 9-digit bases that are never a repeated sequence
    let base = format!("{:09}", 100_000_000 + index * 7_919);
    CreateMemberRequest {
        name: format!("Member {}", index),
        person_type: PersonType::Individual,
        identifier: append_check_digits(&base, PersonType::Individual)
            .unwrap()
            .formatted(),
        reference_date: NaiveDate::from_ymd_opt(1985, 3, 20).unwrap(),
        amount: Decimal::new(350000, 2),
        phone: "(11) 98765-4321".to_string(),
        email: Some(format!("member{}@example.com", index)),
    }
}

/// Benchmark the individual field validators.
fn bench_field_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_validators");

    group.bench_function("cpf", |b| {
        b.iter(|| validate_identifier(black_box("123.456.789-09"), PersonType::Individual))
    });
    group.bench_function("cnpj", |b| {
        b.iter(|| validate_identifier(black_box("11.222.333/0001-81"), PersonType::Organization))
    });
    group.bench_function("phone", |b| b.iter(|| validate_phone(black_box("(11) 99999-9999"))));
    group.bench_function("email", |b| {
        b.iter(|| validate_email(black_box(Some("Maria.Silva@Example.com"))))
    });

    group.finish();
}

/// Benchmark the facade with every field valid and with several failing.
fn bench_validate_member(c: &mut Criterion) {
    let valid = request(1);
    let mut invalid = request(2);
    invalid.identifier = "123.456.789-00".to_string();
    invalid.phone = "(10) 59999-9999".to_string();
    invalid.email = Some("not-an-email".to_string());

    let mut group = c.benchmark_group("validate_member");
    group.bench_function("valid", |b| {
        b.iter(|| validate_member(black_box(&valid), today(), |_| false))
    });
    group.bench_function("invalid", |b| {
        b.iter(|| validate_member(black_box(&invalid), today(), |_| false))
    });
    group.finish();
}

/// Benchmark registration against registries of different sizes.
fn bench_service_create(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("service_create");

    for size in [1usize, 1_000, 10_000] {
        let service = MemberServiceImpl::new(
            Arc::new(InMemoryMemberRepository::new()) as Arc<dyn MemberRepository>,
            Arc::new(FixedClock(today())),
            15,
            100,
        );
        rt.block_on(async {
            for i in 0..size {
                service.create(request(i)).await.unwrap();
            }
        });

        // Re-registering an existing identifier exercises the full path
        // without growing the registry between iterations
        group.bench_with_input(BenchmarkId::new("duplicate", size), &size, |b, _| {
            b.to_async(&rt).iter(|| async {
                let _ = service.create(request(0)).await;
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_field_validators,
        bench_validate_member,
        bench_service_create
}

criterion_main!(benches);
