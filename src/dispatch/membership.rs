//! Roster tracking: `353`/`366` snapshots and `JOIN`/`PART`/`KICK` changes.

use super::{Context, Matcher};
use crate::event::Event;
use slirc_proto::numeric::{RPL_ENDOFNAMES, RPL_NAMREPLY};
use slirc_proto::{Frame, Origin};

/// Rebuilds the roster from `353` lines.
pub struct NamesMatcher;

impl Matcher for NamesMatcher {
    fn name(&self) -> &'static str {
        "names"
    }

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()> {
        if !frame.is_numeric(RPL_NAMREPLY) {
            return None;
        }
        // 353 <target> <symbol> <channel> :<names...>
        let names = frame.params().get(3..).filter(|rest| !rest.is_empty())?;
        let tokens = names.iter().flat_map(|param| param.split_whitespace());
        ctx.state.absorb_names(tokens);
        Some(())
    }
}

/// Publishes the sorted roster on `366`.
pub struct NamesEndMatcher;

impl Matcher for NamesEndMatcher {
    fn name(&self) -> &'static str {
        "names-end"
    }

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()> {
        if !frame.is_numeric(RPL_ENDOFNAMES) {
            return None;
        }
        let roster = ctx.state.finish_names();
        ctx.emit(Event::RosterUpdated(roster));
        Some(())
    }
}

/// Applies `JOIN`, `PART` and `KICK` to the roster of the current channel.
///
/// The notice line is emitted for every well-formed event. The roster is
/// re-published only when the event concerns the current channel.
pub struct MembershipChangeMatcher;

impl MembershipChangeMatcher {
    fn join(ctx: &mut Context<'_>, user: Origin<'_>, frame: &Frame) -> Option<String> {
        // JOIN <channel>{,<channel>}
        let rooms: Vec<&str> = frame.param(0)?.split(',').filter(|r| !r.is_empty()).collect();
        let first = rooms.first()?;

        if ctx.state.is_me(user.nick) {
            ctx.state.enter_room(first);
        }
        if rooms.iter().any(|room| ctx.state.is_current_room(room)) {
            ctx.state.add_member(user.nick);
            publish_roster(ctx);
        }
        Some(format!("{user} has joined {}", rooms.join(",")))
    }

    fn part(ctx: &mut Context<'_>, user: Origin<'_>, frame: &Frame) -> Option<String> {
        // PART <channel>{,<channel>} [:<reason>]
        let rooms: Vec<&str> = frame.param(0)?.split(',').filter(|r| !r.is_empty()).collect();

        if rooms.iter().any(|room| ctx.state.is_current_room(room)) {
            if ctx.state.is_me(user.nick) {
                ctx.state.clear_room();
            } else {
                ctx.state.remove_member(user.nick);
            }
            publish_roster(ctx);
        }
        Some(format!("{user} has left {}", rooms.join(",")))
    }

    fn kick(ctx: &mut Context<'_>, user: Origin<'_>, frame: &Frame) -> Option<String> {
        // KICK <channel> <nick> [:<reason>]
        let room = frame.param(0)?;
        let victim = frame.param(1)?;

        if ctx.state.is_current_room(room) {
            if ctx.state.is_me(victim) {
                ctx.state.clear_room();
            } else {
                ctx.state.remove_member(victim);
            }
            publish_roster(ctx);
        }
        Some(format!("{user} kicked {victim} from {room}"))
    }
}

fn publish_roster(ctx: &mut Context<'_>) {
    let roster = ctx.state.sorted_roster();
    ctx.emit(Event::RosterUpdated(roster));
}

impl Matcher for MembershipChangeMatcher {
    fn name(&self) -> &'static str {
        "membership-change"
    }

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()> {
        let apply: fn(&mut Context<'_>, Origin<'_>, &Frame) -> Option<String> = match frame.verb() {
            "JOIN" => Self::join,
            "PART" => Self::part,
            "KICK" => Self::kick,
            _ => return None,
        };
        let Some(user) = frame.user() else {
            tracing::trace!(verb = %frame.verb(), "Membership change without user origin");
            return None;
        };
        let notice = apply(ctx, user, frame)?;
        ctx.emit(Event::DisplayLine(notice));
        Some(())
    }
}
