//! Transcript input parsing

use crate::analysis::TranscriptSegment;

const MAX_SPEAKER_CHARS: usize = 40;
const UNKNOWN_SPEAKER: &str = "Unknown";

fn speaker_prefix(line: &str) -> Option<(&str, &str)> {
    let (speaker, text) = line.split_once(':')?;
    let speaker = speaker.trim();
    if speaker.is_empty() || speaker.chars().count() > MAX_SPEAKER_CHARS {
        return None;
    }
    Some((speaker, text.trim()))
}

/// Split plain `Speaker: text` lines into segments
///
/// Lines without a speaker prefix continue the previous segment. Blank lines
/// are ignored.
pub fn parse_transcript(input: &str) -> Vec<TranscriptSegment> {
    let mut segments: Vec<TranscriptSegment> = Vec::new();

    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((speaker, text)) = speaker_prefix(line) {
            segments.push(TranscriptSegment::new(speaker, text));
            continue;
        }
        match segments.last_mut() {
            Some(last) => {
                if !last.text.is_empty() {
                    last.text.push(' ');
                }
                last.text.push_str(line);
            }
            None => segments.push(TranscriptSegment::new(UNKNOWN_SPEAKER, line)),
        }
    }

    segments
}
