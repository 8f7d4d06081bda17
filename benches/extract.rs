// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use abstract_scrape::core::sanitize::normalize_words;
use abstract_scrape::specs::abstract_page::extract_fields;

/// Synthetic detail page: four sections of `paras` paragraphs each, with a figure
/// and caption after every paragraph.
fn sample_page(paras: usize) -> String {
    let para = "We acquired resting state fMRI from 120 participants (3T, TR=2s) and \
                computed seed-based connectivity maps across 17 networks.";
    let mut body = String::from(
        "<html><body><h4>Authors:</h4><div>Smith J1, Jones K2,, Lee M3</div>",
    );
    for label in ["Introduction:", "Methods:", "Results:", "Conclusions:"] {
        body.push_str(&format!("<h4>{label}</h4>"));
        for i in 0..paras {
            body.push_str(&format!("<div>{para} Item{i}.</div>"));
            body.push_str(r#"<div><a href="fig.png"><img src="fig.png"></a></div>"#);
            body.push_str(r#"<div class="abstractcaption">Figure caption.</div>"#);
        }
    }
    body.push_str("<h4>Keywords:</h4><div>MRI</div><div>Connectivity</div></body></html>");
    body
}

fn bench_extract(c: &mut Criterion) {
    let small = sample_page(5);
    let large = sample_page(200);

    c.bench_function("extract_fields_small", |b| {
        b.iter(|| {
            let ex = extract_fields(black_box(small.as_bytes()));
            black_box(ex.words.len())
        })
    });

    c.bench_function("extract_fields_large", |b| {
        b.iter(|| {
            let ex = extract_fields(black_box(large.as_bytes()));
            black_box(ex.words.len())
        })
    });

    let text = "The scan1 showed clear results. We used MRI 3T. ".repeat(500);
    c.bench_function("normalize_words", |b| {
        b.iter(|| black_box(normalize_words(black_box(&text)).len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
