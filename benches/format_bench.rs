use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phoneformatter::{CountryId, PhoneFormatter, i18n::Country};

fn setup_numbers() -> Vec<&'static str> {
    vec![
        "79071234567",
        "89071234567",
        "380123456789",
        "375291234567",
        "12125551234",
        "447911123456",
        "4915123456789",
    ]
}

/// Feeds the number one digit at a time, the way a text field does.
fn type_number(phone_formatter: &PhoneFormatter, number: &str, candidates: &[CountryId]) -> String {
    let mut buffer = String::with_capacity(number.len() * 2);
    for digit in number.chars() {
        buffer.push(digit);
        phone_formatter.format(&mut buffer, candidates);
    }
    buffer
}

fn formatting_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let phone_formatter = PhoneFormatter::new();
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("As-you-type formatting");

    let candidate_sets: [(&str, Vec<CountryId>); 3] = [
        ("single country", vec![Country::ru()]),
        ("two countries", vec![Country::ru(), Country::ua()]),
        ("whole catalog", vec![]),
    ];
    for (name, candidates) in &candidate_sets {
        group.bench_function(format!("keystrokes: {}", name), |b| {
            b.iter(|| {
                for number in &numbers {
                    type_number(&phone_formatter, black_box(number), black_box(candidates));
                }
            })
        });
    }

    group.bench_function("whole number: whole catalog", |b| {
        b.iter(|| {
            for number in &numbers {
                let mut buffer = (*number).to_owned();
                phone_formatter.format(black_box(&mut buffer), &[]);
            }
        })
    });

    group.bench_function("catalog loading", |b| b.iter(PhoneFormatter::new));
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
