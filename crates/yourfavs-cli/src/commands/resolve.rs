//! `yourfavs resolve`: print where an auth flow would redirect.

use tracing::info;

use yourfavs_adapters::TracingAudit;
use yourfavs_core::{application::RedirectService, domain::AuthFlow};

use crate::{cli::ResolveArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: ResolveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let policy = config.redirect_policy(args.default.as_deref())?;
    let service = RedirectService::new(policy, Box::new(TracingAudit::new()));

    let flow = AuthFlow::from(args.flow);
    let decision = service.resolve(flow, args.candidate.as_deref());

    info!(
        flow = %flow,
        location = %decision.location,
        accepted = decision.is_accepted(),
        "Resolved redirect"
    );

    if output.is_json() {
        output.json(&decision)?;
    } else {
        output.data(&decision.location)?;
    }

    Ok(())
}
