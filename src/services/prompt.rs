// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prompt compiler: turns a [`RoastRequest`] into the instruction text sent
//! to the generation backend.
//!
//! The prompt is a fixed sequence of blocks:
//!
//! 1. role framing
//! 2. tone label (`ROASTING LEVEL` / `PRAISE INTENSITY`)
//! 3. athlete profile
//! 4. numbered activity list
//! 5. recent vs year-to-date run totals
//! 6. structural instructions (4 paragraphs, no headers)
//!
//! All language-specific wording lives in two tables, [`Locale`] for the
//! data blocks and [`ModeText`] for everything that depends on the mode.
//! A single renderer walks the blocks, so both languages share one layout.

use crate::models::{format_km, Language, RoastActivity, RoastMode, RoastRequest};

/// Separator between prompt lines. Every line after the first is indented.
const LINE_BREAK: &str = "\n    ";

/// Labels used by the data blocks.
struct Locale {
    data_heading: &'static str,
    name: &'static str,
    location: &'static str,
    weight: &'static str,
    recent_activities: &'static str,
    activities_unit: &'static str,
    minutes: &'static str,
    elevation: &'static str,
    activity_type: &'static str,
    stats_heading: &'static str,
    recent_runs: &'static str,
    runs_unit: &'static str,
}

const EN: Locale = Locale {
    data_heading: "Athlete Data:",
    name: "Name",
    location: "Location",
    weight: "Weight",
    recent_activities: "Recent Activities",
    activities_unit: "activities",
    minutes: "minutes",
    elevation: "elevation",
    activity_type: "type",
    stats_heading: "Statistics:",
    recent_runs: "Recent runs",
    runs_unit: "runs",
};

const ID: Locale = Locale {
    data_heading: "Data Atlet:",
    name: "Nama",
    location: "Lokasi",
    weight: "Berat",
    recent_activities: "Aktivitas Terbaru",
    activities_unit: "aktivitas",
    minutes: "menit",
    elevation: "elevasi",
    activity_type: "jenis",
    stats_heading: "Statistik:",
    recent_runs: "Lari terbaru",
    runs_unit: "kali lari",
};

/// Closing instruction block.
struct Instructions {
    heading: &'static str,
    structure_intro: &'static str,
    /// Exactly four paragraphs.
    structure: [&'static str; 4],
    checklist_intro: &'static str,
    checklist: &'static [&'static str],
    closing: &'static str,
}

/// Everything that varies with the mode for one language.
struct ModeText {
    role: &'static str,
    /// Tone per intensity, starting at intensity 1.
    tones: &'static [&'static str],
    /// Index into `tones` used when the intensity has no tone of its own.
    default_tone: usize,
    instructions: Instructions,
}

const ROAST_EN: ModeText = ModeText {
    role: "You are a very witty and sarcastic fitness coach who loves to roast athletes based on their Strava data.",
    tones: &[
        "Light Level - Very gentle and playful roasting, more like friendly teasing",
        "Medium Level - Funny but polite roasting with entertaining subtle jabs",
        "Hard Level - Sharper and more sarcastic roasting, but still within reasonable limits",
        "Brutal Level - Very sarcastic and spicy roasting, for those who dare the maximum challenge",
    ],
    default_tone: 3,
    instructions: Instructions {
        heading: "ROASTING INSTRUCTIONS:",
        structure_intro: "Create a roast in 4 paragraphs with this structure:",
        structure: [
            "1. Opening & sarcastic greeting with name and username",
            "2. Deep data analysis focusing on the most \"interesting\" aspect",
            "3. Roasting signature move from activities or training patterns",
            "4. Closing with disguised \"praise\" or sarcastic advice",
        ],
        checklist_intro: "Make sure the roasting:",
        checklist: &[
            "- Uses natural and casual English",
            "- Is based on the actual data provided",
            "- Matches the selected roasting level",
            "- Is entertaining without being personally offensive",
            "- Uses relatable humor",
            "- Each paragraph 2-3 sentences",
            "- Total around 8-12 sentences",
            "- DON'T USE HEADERS OR PARAGRAPH TITLES, just write the text directly",
        ],
        closing: "Start roasting now:",
    },
};

const ROAST_ID: ModeText = ModeText {
    role: "Kamu adalah seorang pelatih fitness yang sangat witty dan sarkastik yang suka mem-roast atlet berdasarkan data Strava mereka.",
    tones: &[
        "Level Ringan - Roasting yang sangat halus dan playful, lebih seperti godaan ringan antar teman",
        "Level Sedang - Roasting yang lucu tapi tetap sopan, dengan sedikit sindiran yang menghibur",
        "Level Keras - Roasting yang lebih tajam dan sarkastik, tapi masih dalam batas wajar",
        "Level Brutal - Roasting yang sangat sarkastik dan pedas, untuk yang berani tantangan maksimal",
    ],
    default_tone: 3,
    instructions: Instructions {
        heading: "INSTRUKSI ROASTING:",
        structure_intro: "Buat roasting dalam 4 paragraf dengan struktur:",
        structure: [
            "1. Pembukaan & sapaan sarkastik dengan nama dan username",
            "2. Analisis data mendalam dengan fokus pada aspek yang \"menarik\" ",
            "3. Roasting signature move dari aktivitas atau pola training",
            "4. Penutup dengan \"pujian\" terselubung atau nasihat sarkastik",
        ],
        checklist_intro: "Pastikan roasting:",
        checklist: &[
            "- Menggunakan Bahasa Indonesia yang natural dan gaul",
            "- Berdasarkan data nyata yang diberikan",
            "- Sesuai dengan level roasting yang dipilih",
            "- Menghibur tanpa menyinggung secara personal",
            "- Menggunakan humor Indonesia yang relate",
            "- Setiap paragraf 2-3 kalimat",
            "- Total sekitar 8-12 kalimat",
            "- JANGAN GUNAKAN HEADER ATAU JUDUL PARAGRAF, langsung tulis teksnya saja",
        ],
        closing: "Mulai roasting sekarang:",
    },
};

const MOTIVATE_EN: ModeText = ModeText {
    role: "You are a very supportive and inspiring fitness coach who loves to celebrate athletes' achievements based on their Strava data.",
    tones: &[
        "Motivation - Warm and supportive encouragement",
        "Celebration - Celebrating achievements with high enthusiasm",
        "Inspirational - Deep praise that inspires and lifts spirits",
    ],
    default_tone: 0,
    instructions: Instructions {
        heading: "PRAISE INSTRUCTIONS:",
        structure_intro: "Create praise in 4 paragraphs with this structure:",
        structure: [
            "1. Positive opening with sincere recognition and mentioning their name",
            "2. Highlight specific achievements with detailed data",
            "3. Recognition of strengths and good habits from their activities",
            "4. Motivation and encouragement for the future",
        ],
        checklist_intro: "Make sure the praise:",
        checklist: &[
            "- Uses warm and natural English",
            "- Is based on the actual data provided",
            "- Matches the selected praise intensity",
            "- Is genuine and not excessive",
            "- Motivates continued growth",
            "- Uses a positive and uplifting tone",
            "- Each paragraph 2-3 sentences",
            "- Total around 8-12 sentences",
            "- DON'T USE HEADERS OR PARAGRAPH TITLES, just write the text directly",
        ],
        closing: "Start praising now:",
    },
};

const MOTIVATE_ID: ModeText = ModeText {
    role: "Kamu adalah seorang pelatih fitness yang sangat supportive dan inspiring yang suka merayakan pencapaian atlet berdasarkan data Strava mereka.",
    tones: &[
        "Motivasi - Dorongan semangat yang hangat dan mendukung",
        "Celebration - Merayakan pencapaian dengan antusiasme tinggi",
        "Inspirational - Pujian mendalam yang menginspirasi dan mengangkat semangat",
    ],
    default_tone: 0,
    instructions: Instructions {
        heading: "INSTRUKSI PUJIAN:",
        structure_intro: "Buat pujian dalam 4 paragraf dengan struktur:",
        structure: [
            "1. Opening positif dengan pengakuan tulus dan menyebutkan nama",
            "2. Highlight pencapaian spesifik dengan data yang detail",
            "3. Recognition kekuatan dan kebiasaan baik dari aktivitas mereka",
            "4. Motivasi dan encouragement untuk masa depan",
        ],
        checklist_intro: "Pastikan pujian:",
        checklist: &[
            "- Menggunakan Bahasa Indonesia yang hangat dan natural",
            "- Berdasarkan data nyata yang diberikan",
            "- Sesuai dengan intensitas pujian yang dipilih",
            "- Tulus dan tidak berlebihan",
            "- Memotivasi untuk terus berkembang",
            "- Menggunakan tone yang positif dan mengangkat semangat",
            "- Setiap paragraf 2-3 kalimat",
            "- Total sekitar 8-12 kalimat",
            "- JANGAN GUNAKAN HEADER ATAU JUDUL PARAGRAF, langsung tulis teksnya saja",
        ],
        closing: "Mulai pujian sekarang:",
    },
};

fn locale(language: Language) -> &'static Locale {
    match language {
        Language::En => &EN,
        Language::Id => &ID,
    }
}

fn mode_text(mode: RoastMode, language: Language) -> &'static ModeText {
    match (mode, language) {
        (RoastMode::Roast, Language::En) => &ROAST_EN,
        (RoastMode::Roast, Language::Id) => &ROAST_ID,
        (RoastMode::Motivate, Language::En) => &MOTIVATE_EN,
        (RoastMode::Motivate, Language::Id) => &MOTIVATE_ID,
    }
}

/// Tone label heading. Not translated.
fn level_label(mode: RoastMode) -> &'static str {
    match mode {
        RoastMode::Roast => "ROASTING LEVEL",
        RoastMode::Motivate => "PRAISE INTENSITY",
    }
}

/// Tone description for an intensity. Out-of-range and missing intensities
/// fall back to the mode's default (brutal for roast, warm for motivate).
pub fn tone_description(mode: RoastMode, language: Language, intensity: Option<i64>) -> &'static str {
    let text = mode_text(mode, language);
    let index = intensity
        .filter(|level| (1..=text.tones.len() as i64).contains(level))
        .map(|level| level as usize - 1)
        .unwrap_or(text.default_tone);
    text.tones[index]
}

/// Compile the generation prompt for a request.
pub fn compile(request: &RoastRequest) -> String {
    let mode = request.options.mode;
    let language = request.options.language;
    let words = locale(language);
    let text = mode_text(mode, language);
    let athlete = &request.athlete;
    let stats = &request.stats;

    let ftp = athlete
        .ftp
        .map(|ftp| ftp.to_string())
        .unwrap_or_else(|| "null".to_string());

    let activities = request
        .activities
        .iter()
        .enumerate()
        .map(|(index, activity)| activity_line(index + 1, activity, words))
        .collect::<Vec<_>>()
        .join("\n");

    let mut lines: Vec<String> = vec![
        text.role.to_string(),
        String::new(),
        format!(
            "{}: {}",
            level_label(mode),
            tone_description(mode, language, request.options.intensity)
        ),
        String::new(),
        // Athlete profile
        words.data_heading.to_string(),
        format!(
            "{}: {} {} (@{})",
            words.name, athlete.firstname, athlete.lastname, athlete.username
        ),
        format!(
            "{}: {}, {}, {}",
            words.location, athlete.city, athlete.state, athlete.country
        ),
        format!("Followers: {}", athlete.follower_count),
        format!("{}: {}kg", words.weight, athlete.weight),
        format!("FTP: {}w", ftp),
        String::new(),
        format!(
            "{} ({} {}):",
            words.recent_activities,
            request.activities.len(),
            words.activities_unit
        ),
        activities,
        String::new(),
        // Run totals
        words.stats_heading.to_string(),
        format!(
            "- {}: {} {}, total {}km",
            words.recent_runs,
            stats.recent_run_totals.count,
            words.runs_unit,
            stats.recent_run_totals.distance_km()
        ),
        format!(
            "- Year-to-Date: {} {}, total {}km",
            stats.ytd_run_totals.count,
            words.runs_unit,
            stats.ytd_run_totals.distance_km()
        ),
        String::new(),
    ];

    let instructions = &text.instructions;
    lines.push(instructions.heading.to_string());
    lines.push(String::new());
    lines.push(instructions.structure_intro.to_string());
    lines.extend(instructions.structure.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines.push(instructions.checklist_intro.to_string());
    lines.extend(instructions.checklist.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines.push(instructions.closing.to_string());

    format!("{LINE_BREAK}{}{LINE_BREAK}", lines.join(LINE_BREAK))
}

/// `"{n}. {name}: {km}km, {minutes} minutes, {elevation}m elevation, type: {type}"`
fn activity_line(number: usize, activity: &RoastActivity, words: &Locale) -> String {
    format!(
        "{}. {}: {}km, {} {}, {}m {}, {}: {}",
        number,
        activity.name,
        format_km(activity.distance),
        activity.moving_time / 60,
        words.minutes,
        activity.total_elevation_gain,
        words.elevation,
        words.activity_type,
        activity.activity_type
    )
}
