//! Telegram export generator for stress testing tgprettify.
//!
//! Produces a `result.json`-shaped file mixing plain and rich-text bodies,
//! forwarded messages (including `"forwarded_from": null`), empty bodies,
//! service entries without `from`, and unicode-heavy content.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_test.json

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

const ZALGO_CHARS: &[char] = &[
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0308}', '\u{030A}', '\u{0316}', '\u{0317}',
    '\u{0320}', '\u{0327}', '\u{0334}', '\u{0338}', '\u{033F}', '\u{0341}',
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤔", "🔥", "🚀", "💀", "🌈", "👍", "❤️", "🏳️‍🌈", "🇰🇿", "👨‍👩‍👧‍👦", "🧑‍🚀",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "User \"Quoted\"",
    "🔥FireUser🔥",
    "",
];

const CHANNELS: &[&str] = &["Rust News", "Release Notes", "Мемы", "Deploy Bot"];

const KEYWORDS: &[&str] = &["deploy", "release", "rollback", "incident", "Rust"];

const SPAN_TYPES: &[&str] = &["bold", "italic", "code", "pre", "strikethrough"];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_test.json", |s| s.as_str());

    println!("🧪 Telegram Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    if let Err(e) = generate(count, output) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(count: usize, output: &str) -> std::io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"name\": \"Stress Test Chat\",")?;
    writeln!(writer, "  \"type\": \"private_supergroup\",")?;
    writeln!(writer, "  \"id\": 1000000001,")?;
    writeln!(writer, "  \"messages\": [")?;

    let start = Instant::now();
    let mut bytes_written: usize = 0;

    for i in 0..count {
        let msg = generate_message(&mut rng, i);
        let comma = if i + 1 < count { "," } else { "" };
        let line = format!("    {}{}", serde_json::to_string(&msg)?, comma);

        bytes_written += line.len();
        writeln!(writer, "{}", line)?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );

    Ok(())
}

fn generate_message(rng: &mut impl Rng, index: usize) -> Value {
    let date = format!(
        "2024-{:02}-{:02}T{:02}:{:02}:{:02}",
        (index / 40_000) % 12 + 1,
        (index / 1_440) % 28 + 1,
        (index / 60) % 24,
        index % 60,
        (index * 7) % 60
    );

    // Service entries carry an action instead of a sender.
    if index % 50 == 49 {
        return json!({
            "id": index + 1,
            "type": "service",
            "date": date,
            "actor": SENDERS[index % SENDERS.len()],
            "action": "pin_message",
            "text": "",
        });
    }

    let mut msg = json!({
        "id": index + 1,
        "type": "message",
        "date": date,
        "date_unixtime": (1_700_000_000 + index).to_string(),
        "from": SENDERS.choose(rng).copied().unwrap_or("Alice"),
        "text": generate_text(rng, index),
    });

    match index % 17 {
        3 => msg["forwarded_from"] = json!(CHANNELS.choose(rng).copied().unwrap_or("Rust News")),
        11 => msg["forwarded_from"] = Value::Null,
        _ => {}
    }

    msg
}

fn generate_text(rng: &mut impl Rng, index: usize) -> Value {
    match index % 20 {
        // Plain messages, some with filter keywords
        0..=4 => json!(format!("Normal message #{} with some text", index)),
        5 | 6 => json!(format!(
            "Heads up: {} scheduled for #{}",
            KEYWORDS.choose(rng).copied().unwrap_or("deploy"),
            index
        )),

        // Rich text: alternating strings and entity objects
        7..=9 => generate_rich_text(rng, index),

        // Links and mentions as entity-only arrays
        10 => json!([
            {"type": "mention", "text": "@alice"},
            " see ",
            {"type": "link", "text": "https://example.com/changelog"},
        ]),

        // Emoji spam
        11 => {
            let emojis: String = (0..30)
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            json!(format!("Emoji spam: {} #{}", emojis, index))
        }

        // Zalgo text
        12 => json!(generate_zalgo("This is zalgo text", rng)),

        // Unicode
        13 => json!(format!("Кириллица: Привет мир! #{}", index)),
        14 => json!(format!("日本語: こんにちは #{}", index)),
        15 => json!(format!("Mixed: Hello Привет 你好 🌍 #{}", index)),

        // Empty-ish bodies
        16 => json!(""),
        17 => json!([]),
        18 => json!("   "),

        // Large message
        19 if index % 1000 == 19 => {
            let padding: String = (0..50_000).map(|_| 'X').collect();
            json!(format!("Giant message #{}: {}", index, padding))
        }

        _ => json!(format!("Fallback message #{}", index)),
    }
}

fn generate_rich_text(rng: &mut impl Rng, index: usize) -> Value {
    let parts = rng.gen_range(2..=6);
    let spans: Vec<Value> = (0..parts)
        .map(|p| {
            if rng.gen_bool(0.5) {
                json!(format!("part {} of #{} ", p, index))
            } else {
                json!({
                    "type": SPAN_TYPES.choose(rng).copied().unwrap_or("bold"),
                    "text": format!("span{}", p),
                })
            }
        })
        .collect();
    Value::Array(spans)
}

fn generate_zalgo(text: &str, rng: &mut impl Rng) -> String {
    let mut result = String::new();
    for c in text.chars() {
        result.push(c);
        // Add 1-6 random combining characters
        for _ in 0..rng.gen_range(1..=6) {
            result.push(ZALGO_CHARS[rng.gen_range(0..ZALGO_CHARS.len())]);
        }
    }
    result
}
