//! Anchorwork demo binary.
//!
//! Wires the in-memory adapters together and walks one team through a
//! working week: declared schedules, attendance accrual, a remote-day
//! request on both the approval and cancellation paths, a compliance
//! check per member, and the two anchor-day consensus computations.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use anchorwork::adapters::{
    InMemoryBalanceStore, InMemoryEventPublisher, InMemoryPolicyStore, InMemoryRequestStore,
    InMemoryScheduleStore, InMemoryVoteStore, SystemClock, WeekdayCalendar,
};
use anchorwork::application::handlers::{
    CancelRemoteDayCommand, CancelRemoteDayHandler, CastVoteCommand, CastVoteHandler,
    CheckComplianceHandler, CheckComplianceQuery, ComputeAnchorDaysHandler,
    ComputeAnchorDaysQuery, ComputeVotedAnchorDaysHandler, ComputeVotedAnchorDaysQuery,
    RecordAttendanceCommand, RecordAttendanceHandler, ResolveRemoteDayCommand,
    ResolveRemoteDayHandler, SubmitRemoteDayCommand, SubmitRemoteDayHandler,
    UpsertScheduleCommand, UpsertScheduleHandler,
};
use anchorwork::config::AppConfig;
use anchorwork::domain::foundation::{TeamId, UserId, WorkDate};
use anchorwork::domain::schedule::{WorkType, WorkWeek};
use anchorwork::ports::{BalanceStore, PolicyStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("anchorwork=info".parse()?),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    info!(
        model = ?config.rewards.accrual_model,
        required_office_days = config.rto.required_office_days,
        "Anchorwork engine starting"
    );

    // Shared adapters
    let balance_store = Arc::new(InMemoryBalanceStore::new());
    let schedule_store = Arc::new(InMemoryScheduleStore::new());
    let request_store = Arc::new(InMemoryRequestStore::new());
    let vote_store = Arc::new(InMemoryVoteStore::new());
    let policy_store = Arc::new(InMemoryPolicyStore::new());
    let event_publisher = Arc::new(InMemoryEventPublisher::new());
    let clock = Arc::new(SystemClock);
    let calendar = Arc::new(WeekdayCalendar::with_holidays(
        config.calendar.holiday_dates()?,
    ));

    let team_id = TeamId::new("team-atlas")?;
    let default_policy = config.rto.policy()?;
    policy_store.put(&team_id, &default_policy).await?;

    // Handlers
    let upsert_schedule = UpsertScheduleHandler::new(
        schedule_store.clone(),
        policy_store.clone(),
        default_policy.clone(),
    );
    let record_attendance = RecordAttendanceHandler::new(
        balance_store.clone(),
        calendar.clone(),
        event_publisher.clone(),
        clock.clone(),
        config.rewards.accrual_model(),
        config.rewards.max_write_attempts,
    );
    let submit_request = SubmitRemoteDayHandler::new(
        balance_store.clone(),
        request_store.clone(),
        event_publisher.clone(),
        clock.clone(),
        config.rewards.accrual_model(),
        config.rewards.max_write_attempts,
    );
    let cancel_request = CancelRemoteDayHandler::new(
        request_store.clone(),
        balance_store.clone(),
        event_publisher.clone(),
        clock.clone(),
        config.rewards.max_write_attempts,
    );
    let resolve_request = ResolveRemoteDayHandler::new(
        request_store.clone(),
        balance_store.clone(),
        event_publisher.clone(),
        clock.clone(),
        config.rewards.max_write_attempts,
    );
    let check_compliance = CheckComplianceHandler::new(
        schedule_store.clone(),
        policy_store.clone(),
        default_policy.clone(),
    );
    let cast_vote = CastVoteHandler::new(vote_store.clone());
    let compute_anchor_days = ComputeAnchorDaysHandler::new(schedule_store.clone());
    let compute_voted_anchor_days = ComputeVotedAnchorDaysHandler::new(vote_store.clone());

    // One team, one week in March 2025
    let members: Vec<UserId> = ["alice", "bo", "carol", "dan"]
        .iter()
        .map(|name| UserId::new(*name))
        .collect::<Result<_, _>>()?;
    let week = WorkWeek::containing(WorkDate::new(2025, 3, 17)?);
    let next_week = week.next();

    // Declared schedules: which days each member plans to be in
    let office_plan: [(usize, [WorkType; 5]); 4] = [
        // Mon, Tue, Wed, Thu, Fri
        (0, [WorkType::Office, WorkType::Office, WorkType::Office, WorkType::Office, WorkType::Remote]),
        (1, [WorkType::Office, WorkType::Office, WorkType::Remote, WorkType::Office, WorkType::Remote]),
        (2, [WorkType::Remote, WorkType::Office, WorkType::Office, WorkType::Office, WorkType::Flexible]),
        (3, [WorkType::Office, WorkType::Office, WorkType::Remote, WorkType::Remote, WorkType::Remote]),
    ];

    for (member_idx, week_types) in &office_plan {
        for (day_idx, work_type) in week_types.iter().enumerate() {
            upsert_schedule
                .handle(UpsertScheduleCommand {
                    user_id: members[*member_idx].clone(),
                    team_id: team_id.clone(),
                    date: week.monday().plus_days(day_idx as i64),
                    work_type: *work_type,
                    is_anchor_day: false,
                })
                .await?;
        }
    }
    info!(team_id = %team_id, "Week declared for all members");

    // Attendance lands on the declared office days, in date order
    for (member_idx, week_types) in &office_plan {
        for (day_idx, work_type) in week_types.iter().enumerate() {
            if !work_type.counts_as_office() {
                continue;
            }
            let outcome = record_attendance
                .handle(RecordAttendanceCommand {
                    user_id: members[*member_idx].clone(),
                    team_id: team_id.clone(),
                    date: week.monday().plus_days(day_idx as i64),
                })
                .await?;
            info!(
                user_id = %members[*member_idx],
                credited = %outcome.credited,
                streak = outcome.streak,
                balance = %outcome.current_balance,
                "Attendance recorded"
            );
        }
    }

    // Alice books a remote day next Monday and the team lead approves it
    let submitted = submit_request
        .handle(SubmitRemoteDayCommand {
            request_id: None,
            user_id: members[0].clone(),
            team_id: team_id.clone(),
            date: next_week.monday(),
            days_requested: 1,
            reason: Some("deep-focus day".to_string()),
        })
        .await?;
    info!(
        request_id = %submitted.request.id,
        reserved = %submitted.reserved,
        "Remote day requested"
    );

    let resolved = resolve_request
        .handle(ResolveRemoteDayCommand {
            request_id: submitted.request.id,
            approved: true,
        })
        .await?;
    info!(
        request_id = %resolved.request.id,
        settled = %resolved.settled,
        "Remote day approved"
    );

    // Bo books one too, then thinks better of it
    let bos = submit_request
        .handle(SubmitRemoteDayCommand {
            request_id: None,
            user_id: members[1].clone(),
            team_id: team_id.clone(),
            date: next_week.friday(),
            days_requested: 1,
            reason: None,
        })
        .await?;
    let cancelled = cancel_request
        .handle(CancelRemoteDayCommand {
            request_id: bos.request.id,
        })
        .await?;
    info!(
        request_id = %cancelled.request.id,
        restored = %cancelled.restored,
        "Remote day cancelled"
    );

    // Weekly compliance per member
    for member in &members {
        let report = check_compliance
            .handle(CheckComplianceQuery {
                user_id: member.clone(),
                team_id: team_id.clone(),
                week,
            })
            .await?;
        info!(user_id = %member, "{}", report.summary());
    }

    // Anchor days the declared schedules imply
    let consensus = compute_anchor_days
        .handle(ComputeAnchorDaysQuery {
            team_id: team_id.clone(),
            member_ids: members.clone(),
            week,
        })
        .await?;
    info!(
        team_size = consensus.team_size,
        anchor_days = ?consensus.anchor_days,
        "Schedule consensus computed"
    );

    // Ballots for next week: three of four want Tuesday
    let ballots: [&[u32]; 4] = [&[25], &[25, 27], &[25], &[]];
    for (member, days) in members.iter().zip(ballots) {
        let voted_days: BTreeSet<WorkDate> = days
            .iter()
            .map(|d| WorkDate::new(2025, 3, *d))
            .collect::<Result<_, _>>()?;
        cast_vote
            .handle(CastVoteCommand {
                team_id: team_id.clone(),
                user_id: member.clone(),
                voting_week: next_week,
                voted_days,
            })
            .await?;
    }

    let tallies = compute_voted_anchor_days
        .handle(ComputeVotedAnchorDaysQuery {
            team_id: team_id.clone(),
            team_size: members.len() as u32,
            week: next_week,
        })
        .await?;
    for tally in &tallies {
        info!(
            date = %tally.date,
            votes = tally.votes,
            is_anchor_day = tally.is_anchor_day,
            "Ballot tally"
        );
    }

    // Closing ledger state
    for member in &members {
        if let Some(versioned) = balance_store.load(member, &team_id).await? {
            let balance = versioned.balance;
            info!(
                user_id = %member,
                current = %balance.current,
                earned = %balance.total_earned,
                used = %balance.total_used,
                streak = balance.streak,
                "Final balance"
            );
        }
    }
    info!(
        events = event_publisher.event_count(),
        "Demo week complete"
    );

    Ok(())
}
