// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcript fixtures in the exported `date, time - sender: text` format.

/// Two-line exchange where Divija greets with "Oh hii".
pub const GREETING_PAIR: &str = "\
03/11/20, 7:35 pm - Avii: Its me yashasvi
03/11/20, 7:35 pm - Divija Joshi: Oh hii";

/// A short first conversation, including the export notice and media lines.
pub const FIRST_CHAT: &str = "\
03/11/20, 7:34 pm - Messages and calls are end-to-end encrypted. Only people in this chat can read, listen to, or share them. Learn more.
03/11/20, 7:34 pm - Avii: <Media omitted>
03/11/20, 7:34 pm - Avii: <Media omitted>
03/11/20, 7:35 pm - Avii: Its me yashasvi
03/11/20, 7:35 pm - Divija Joshi: Oh hii
03/11/20, 7:35 pm - Divija Joshi: I didnt recognize ur voice
03/11/20, 7:35 pm - Avii: Well i have multiple voices
03/11/20, 7:35 pm - Divija Joshi: I was just gonna block u😂
03/11/20, 7:35 pm - Avii: Damnn
03/11/20, 7:36 pm - Avii: I said sigh
03/11/20, 7:36 pm - Divija Joshi: 😂thats not a sigh
03/11/20, 7:36 pm - Avii: Yeah i know
03/11/20, 7:36 pm - Divija Joshi: Nd whose no. Is this
03/11/20, 7:36 pm - Avii: Mine
03/11/20, 7:36 pm - Divija Joshi: Woah
03/11/20, 7:36 pm - Avii: But for some reason calling is not working
03/11/20, 7:36 pm - Divija Joshi: Ohh
03/11/20, 7:36 pm - Avii: Only net sim is working
03/11/20, 7:36 pm - Divija Joshi: Achhha
03/11/20, 7:37 pm - Avii: Yep";

/// Two conversations a day apart. Only the second mentions a trip.
pub const TWO_SESSIONS: &str = "\
10/12/21, 9:00 am - Avii: morning
10/12/21, 9:01 am - Sam: hey
10/12/21, 9:02 am - Avii: exams today
10/12/21, 9:03 am - Sam: good luck
10/12/21, 9:04 am - Avii: thanks
11/12/21, 8:00 pm - Sam: remember the goa trip
11/12/21, 8:01 pm - Avii: best trip ever
11/12/21, 8:02 pm - Sam: we should go again
11/12/21, 8:03 pm - Avii: <Media omitted>
11/12/21, 8:04 pm - Sam: lets plan it
11/12/21, 8:05 pm - Avii: yesss";

/// Build a transcript of `sessions` conversations, each `per_session` lines
/// long, alternating between `a` and `b`. Sessions are a day apart and
/// every one mentions a party.
pub fn party_sessions(a: &str, b: &str, sessions: usize, per_session: usize) -> String {
    let mut lines = Vec::with_capacity(sessions * per_session);
    for day in 0..sessions {
        let date = format!("{:02}/01/22", day + 1);
        for i in 0..per_session {
            let sender = if i % 2 == 0 { a } else { b };
            let body = if i == 0 {
                "that party was wild".to_string()
            } else {
                format!("line {i} of day {}", day + 1)
            };
            lines.push(format!("{date}, 6:{i:02} pm - {sender}: {body}"));
        }
    }
    lines.join("\n")
}
