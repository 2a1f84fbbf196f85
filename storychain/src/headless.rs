//! Headless mode for StoryChain.
//!
//! This module provides a simple line-oriented interface for using the
//! story store without a TUI. It's designed for automated testing and
//! scripted sessions.

use std::io::{self, BufRead, Write};

use story_core::{ContinuationId, StoryId, StoryStore, UserContext, VoteDirection, VotingDuration};

/// Run the application in headless mode.
///
/// Every command is a single line starting with `#`; anything else is
/// rejected. Stories and continuations are addressed by their 1-based
/// position in creation order.
pub fn run_headless(user: UserContext) -> io::Result<()> {
    let mut store = StoryStore::new();

    println!("=== StoryChain Headless Mode ===");
    println!("User: {}", user.username);
    println!();
    print_protocol_help();
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !line.starts_with('#') {
            println!("[ERROR] Commands start with '#'. Type #help for help.");
            continue;
        }

        let rest = &line[1..];
        let (cmd, args) = match rest.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (rest, ""),
        };

        match cmd {
            "quit" | "exit" => {
                println!("Goodbye!");
                break;
            }
            "help" => print_protocol_help(),
            "list" => cmd_list(&store),
            "show" => cmd_show(&store, args),
            "post" => cmd_post(&mut store, &user, args),
            "continue" => cmd_continue(&mut store, &user, args),
            "vote" => cmd_vote(&mut store, &user, args),
            _ => println!("[ERROR] Unknown command. Type #help for help."),
        }
        stdout.flush().ok();
    }

    Ok(())
}

fn print_protocol_help() {
    println!("Commands:");
    println!("  #post <title> | <content> [| 24|48|72]  - Post a new story");
    println!("  #list                                   - List stories");
    println!("  #show <n>                               - Show story n with continuations");
    println!("  #continue <n> <text>                    - Append a continuation to story n");
    println!("  #vote <n> <m> up|down                   - Vote on continuation m of story n");
    println!("  #help                                   - Show this help");
    println!("  #quit                                   - Exit");
}

fn cmd_list(store: &StoryStore) {
    if store.is_empty() {
        println!("[OK] No stories yet.");
        return;
    }
    for (i, story) in store.stories().iter().enumerate() {
        println!(
            "[{}] {} by u/{} ({} parts)",
            i + 1,
            story.title,
            story.author,
            story.part_count()
        );
    }
}

fn cmd_show(store: &StoryStore, args: &str) {
    let Some(id) = story_id_at(store, args) else {
        println!("[ERROR] Usage: #show <n>");
        return;
    };
    // Lookup cannot fail: the id came from the list above.
    let Some(story) = store.story(id) else {
        return;
    };

    println!("[STORY] {}", story.title);
    println!(
        "by u/{} • {} • voting window {}",
        story.author,
        story.created_at.format("%b %d, %Y"),
        story.duration
    );
    println!("{}", story.content);
    println!("[CONTINUATIONS {}]", story.part_count());
    for (i, cont) in story.continuations.iter().enumerate() {
        println!(
            "  [{}] votes {} • u/{}: {}",
            i + 1,
            cont.votes,
            cont.author,
            cont.content
        );
    }
}

fn cmd_post(store: &mut StoryStore, user: &UserContext, args: &str) {
    let Some((title, content, duration)) = parse_post_args(args) else {
        println!("[ERROR] Usage: #post <title> | <content> [| 24|48|72]");
        return;
    };
    match store.create_story(&title, &content, duration, user) {
        Ok(_) => println!("[OK] Posted story {}", store.len()),
        Err(e) => println!("[ERROR] {e}"),
    }
}

fn cmd_continue(store: &mut StoryStore, user: &UserContext, args: &str) {
    let (index, text) = match args.split_once(char::is_whitespace) {
        Some((i, t)) => (i, t.trim()),
        None => (args, ""),
    };
    let Some(id) = story_id_at(store, index) else {
        println!("[ERROR] Usage: #continue <n> <text>");
        return;
    };
    match store.add_continuation(id, text, user) {
        Ok(_) => {
            let parts = store.story(id).map(|s| s.part_count()).unwrap_or(0);
            println!("[OK] Continuation {parts} added");
        }
        Err(e) => println!("[ERROR] {e}"),
    }
}

fn cmd_vote(store: &mut StoryStore, user: &UserContext, args: &str) {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let (story_arg, cont_arg, dir_arg) = match parts.as_slice() {
        [a, b, c] => (*a, *b, *c),
        _ => {
            println!("[ERROR] Usage: #vote <n> <m> up|down");
            return;
        }
    };

    let (Some(story_id), Some(direction)) = (
        story_id_at(store, story_arg),
        VoteDirection::parse(dir_arg),
    ) else {
        println!("[ERROR] Usage: #vote <n> <m> up|down");
        return;
    };
    let Some(continuation_id) = continuation_id_at(store, story_id, cont_arg) else {
        println!("[ERROR] No continuation {cont_arg} on story {story_arg}");
        return;
    };

    match store.vote(story_id, continuation_id, direction, user) {
        Ok(tally) => println!("[OK] Voted {direction}. Tally: {tally}"),
        Err(e) => println!("[ERROR] {e}"),
    }
}

/// Resolve a 1-based story index.
fn story_id_at(store: &StoryStore, arg: &str) -> Option<StoryId> {
    let n: usize = arg.trim().parse().ok()?;
    store.stories().get(n.checked_sub(1)?).map(|s| s.id)
}

/// Resolve a 1-based continuation index within a story.
fn continuation_id_at(
    store: &StoryStore,
    story_id: StoryId,
    arg: &str,
) -> Option<ContinuationId> {
    let n: usize = arg.trim().parse().ok()?;
    store
        .story(story_id)?
        .continuations
        .get(n.checked_sub(1)?)
        .map(|c| c.id)
}

/// Split `#post` arguments on `|` into title, content, and an optional
/// duration.
fn parse_post_args(args: &str) -> Option<(String, String, VotingDuration)> {
    let mut parts = args.splitn(3, '|');
    let title = parts.next()?.trim().to_string();
    let content = parts.next()?.trim().to_string();
    let duration = match parts.next() {
        Some(d) => VotingDuration::parse(d)?,
        None => VotingDuration::default(),
    };
    Some((title, content, duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_args() {
        let (title, content, duration) = parse_post_args("A Title | Some content").unwrap();
        assert_eq!(title, "A Title");
        assert_eq!(content, "Some content");
        assert_eq!(duration, VotingDuration::H24);

        let (_, _, duration) = parse_post_args("T | C | 72").unwrap();
        assert_eq!(duration, VotingDuration::H72);

        assert!(parse_post_args("no separator").is_none());
        assert!(parse_post_args("T | C | tomorrow").is_none());
    }

    #[test]
    fn test_index_resolution() {
        let user = UserContext::new("alice");
        let mut store = StoryStore::new();
        let id = store
            .create_story("T", "c", VotingDuration::H24, &user)
            .unwrap();
        let cont = store.add_continuation(id, "more", &user).unwrap();

        assert_eq!(story_id_at(&store, "1"), Some(id));
        assert_eq!(story_id_at(&store, "2"), None);
        assert_eq!(story_id_at(&store, "0"), None);
        assert_eq!(story_id_at(&store, "x"), None);

        assert_eq!(continuation_id_at(&store, id, "1"), Some(cont));
        assert_eq!(continuation_id_at(&store, id, "2"), None);
    }
}
