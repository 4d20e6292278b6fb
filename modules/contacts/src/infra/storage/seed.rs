//! Sample contacts for demo instances.

use chrono::{DateTime, Duration, Utc};

use crate::contract::model::Contact;

const SAMPLE: &[(&str, &str, &str, &str)] = &[
    // (first, last, twitter, avatar)
    ("Shruti", "Kapoor", "@shrutikapoor08", "https://sessionize.com/image/124e-400o400o2-wHVdAuNaxi8KJrgtN3ZKci.jpg"),
    ("Glenn", "Reyes", "@glnnrys", "https://sessionize.com/image/1940-400o400o2-Enh9dnYmrLYhJSTTPSw3MH.jpg"),
    ("Ryan", "Florence", "", "https://sessionize.com/image/9273-400o400o2-3tyrUE3HjsCHJLU5aUJCja.jpg"),
    ("Oscar", "Newman", "@__oscarnewman", "https://sessionize.com/image/d14d-400o400o2-pyB229HyFPCnUcZhHf3kWS.png"),
    ("Michael", "Jackson", "", "https://sessionize.com/image/fd45-400o400o2-fw91uCdGU9hFP334dnyVCr.jpg"),
    ("Christopher", "Chedeau", "@Vjeux", "https://sessionize.com/image/b07e-400o400o2-KgNRF3S9sD5ZR4UsG7hG4g.jpg"),
    ("Cameron", "Matheson", "@cmatheson", "https://sessionize.com/image/262f-400o400o2-UBPQueK3fayaCmsyUc1Ljf.jpg"),
    ("Brooks", "Lybrand", "@BrooksLybrand", "https://sessionize.com/image/820b-400o400o2-Ja1KDrBAu5NzYTPLSC3GW8.jpg"),
    ("Alex", "Anderson", "@ralex1993", "https://sessionize.com/image/df38-400o400o2-JwbChVUj6V7DwZMc9vJEHc.jpg"),
    ("Kent C.", "Dodds", "@kentcdodds", "https://sessionize.com/image/5578-400o400o2-BMT43t5kd2U1XstaNnM6Ax.jpg"),
];

/// Build the sample contacts with ids `sample-0..` and staggered creation times.
pub fn sample_contacts(now: DateTime<Utc>) -> Vec<Contact> {
    let total = SAMPLE.len() as i64;
    SAMPLE
        .iter()
        .enumerate()
        .map(|(i, (first, last, twitter, avatar))| {
            let mut c = Contact::empty(
                format!("sample-{i}"),
                now - Duration::seconds(total - i as i64),
            );
            c.first = Some(first.to_string());
            c.last = Some(last.to_string());
            c.twitter = Some(twitter.to_string()).filter(|t| !t.is_empty());
            c.avatar = Some(avatar.to_string());
            c
        })
        .collect()
}
