use std::env;

use crate::cli::{Cli, Commands, LastModifiedSource, StampArgs};
use crate::consts::LAST_MODIFIED_ENV;
use crate::error::AppError;
use crate::footer::{DateFooter, RenderedFooter, Timestamp};
use crate::output::{format_stamp_summary, output_footer_json, output_stamp_json, stamp_warnings};
use crate::stamp::{StampSummary, expand_patterns, stamp_files};
use crate::utils::{Timezone, debug_log};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) footer: DateFooter,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli) -> Result<Self, AppError> {
        let timezone = Timezone::parse(cli.timezone.as_deref())?;
        debug_log!("Display timezone: {timezone:?}");
        Ok(Self {
            cli,
            footer: DateFooter::new(timezone),
        })
    }
}

/// Find the footer for a source. Only an explicit file that cannot be
/// read is an error; anything else unusable just means no footer.
fn resolve_footer(
    source: &LastModifiedSource,
    ctx: &CommandContext<'_>,
) -> Result<Option<RenderedFooter>, AppError> {
    match source {
        LastModifiedSource::Raw(raw) => Ok(ctx.footer.render(Some(raw))),
        LastModifiedSource::Environment => {
            let raw = env::var(LAST_MODIFIED_ENV).ok();
            debug_log!("{LAST_MODIFIED_ENV}={raw:?}");
            Ok(ctx.footer.render(raw.as_deref()))
        }
        LastModifiedSource::File(path) => match Timestamp::of_file(path) {
            Ok(timestamp) => Ok(ctx.footer.footer_for(timestamp)),
            Err(AppError::InvalidTimestamp { input }) => {
                debug_log!(
                    "{}: unusable modification time {input}, footer suppressed",
                    path.display()
                );
                Ok(None)
            }
            Err(e) => Err(e),
        },
    }
}

fn handle_render(
    source: &LastModifiedSource,
    date_only: bool,
    ctx: &CommandContext<'_>,
) -> Result<bool, AppError> {
    let Some(footer) = resolve_footer(source, ctx)? else {
        return Ok(true);
    };
    if ctx.cli.json {
        println!("{}", output_footer_json(&footer, !date_only));
    } else if date_only {
        println!("{}", footer.date);
    } else {
        println!("{}", footer.html);
    }
    Ok(true)
}

fn handle_stamp(args: &StampArgs, ctx: &CommandContext<'_>) -> Result<bool, AppError> {
    let marker = ctx.cli.marker(args.marker.as_deref());
    if marker.is_empty() {
        return Err(AppError::EmptyMarker);
    }

    let expansion = expand_patterns(&args.patterns)?;
    debug_log!(
        "{} file(s) matched, marker {marker:?}",
        expansion.files.len()
    );
    let reports = stamp_files(&expansion.files, marker, &ctx.footer, args.dry_run);

    if ctx.cli.json {
        println!("{}", output_stamp_json(&expansion, &reports, args.dry_run));
    } else {
        for line in stamp_warnings(&expansion, &reports) {
            eprintln!("{line}");
        }
        println!("{}", format_stamp_summary(&reports, args.dry_run));
    }
    Ok(StampSummary::from_reports(&reports).failed == 0)
}

/// Run the selected command. `Ok(false)` means it finished with failures.
pub(crate) fn run(cli: &Cli) -> Result<bool, AppError> {
    let ctx = CommandContext::new(cli)?;
    match cli.command() {
        Commands::Render(args) => handle_render(&LastModifiedSource::from(&args), false, &ctx),
        Commands::Date(args) => handle_render(&LastModifiedSource::from(&args), true, &ctx),
        Commands::Stamp(args) => handle_stamp(&args, &ctx),
    }
}
