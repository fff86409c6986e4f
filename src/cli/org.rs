//! Organization command implementations
//!
//! Each command splits into a fetch step over [`OrganizationApi`] (tested
//! against the mock client) and a print step that formats for the terminal.

use colored::Colorize;
use log::debug;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::{Organization, OrganizationApi, Resource};
use crate::error::{Error, Result};
use crate::models::{MemberDisplay, OrgDisplay, ScimGroupDisplay, TeamDisplay};
use crate::output::formatters::{format_date, format_flag, format_opt};
use crate::output::{Formattable, json, table};

/// Field changes requested by `org update`.
#[derive(Debug, Clone, Default)]
pub struct OrgChanges {
    pub name: Option<String>,
    pub early_adopter: Option<bool>,
}

impl OrgChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.early_adopter.is_none()
    }

    fn apply(&self, org: &mut Organization) {
        if let Some(name) = &self.name {
            org.name = name.clone();
        }
        if let Some(flag) = self.early_adopter {
            org.is_early_adopter = Some(flag);
        }
    }
}

/// One page of organizations (or all of them) plus the cursor to resume from.
pub async fn fetch_list(
    api: &dyn OrganizationApi,
    all: bool,
    cursor: Option<&str>,
) -> Result<(Vec<Organization>, Option<String>)> {
    if all {
        return Ok((api.get_all_organizations().await?, None));
    }

    let page = api.get_organizations_page(cursor).await?;
    let next = page.link.next_cursor().map(str::to_string);
    Ok((page.items, next))
}

/// Fetch the current organization, apply `changes`, and send it back.
pub async fn apply_update(
    api: &dyn OrganizationApi,
    slug: &str,
    changes: &OrgChanges,
) -> Result<Organization> {
    if changes.is_empty() {
        return Err(Error::Other(
            "Nothing to update: pass --name or --early-adopter".to_string(),
        ));
    }

    let mut org = api.get_organization(slug).await?;
    changes.apply(&mut org);
    debug!("Updating organization {}", slug);
    api.update_organization(&org).await
}

/// Delete `slug`, refusing unless the caller confirmed.
pub async fn confirm_delete(api: &dyn OrganizationApi, slug: &str, confirmed: bool) -> Result<()> {
    if !confirmed {
        return Err(Error::Other(format!(
            "Refusing to delete organization '{}' without --yes",
            slug
        )));
    }

    api.delete_organization(&Organization::with_slug(slug)).await
}

/// Run the org list command
pub async fn list(ctx: &CommandContext, all: bool, cursor: Option<&str>) -> Result<()> {
    let (orgs, next) = fetch_list(&ctx.client, all, cursor).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<OrgDisplay> = orgs.iter().map(OrgDisplay::from).collect();
            println!("{}", table::format_table(&rows));
            if let Some(cursor) = next {
                println!(
                    "\n{} more results: {}",
                    "→".dimmed(),
                    format!("sentryop org list --cursor {}", cursor).cyan()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json_page(&orgs, next.as_deref())?);
        }
    }

    Ok(())
}

/// Run the org get command
pub async fn get(ctx: &CommandContext, slug: Option<&str>) -> Result<()> {
    let slug = ctx.require_org(slug)?;
    let org = ctx.client.get_organization(&slug).await?;

    match ctx.format {
        OutputFormat::Table => print_detail(&org),
        OutputFormat::Json => println!("{}", json::format_json(&org)?),
    }

    Ok(())
}

fn print_detail(org: &Organization) {
    println!("{}", org.name.bold());
    println!("  Slug:          {}", format_opt(org.slug.as_deref()));
    println!("  ID:            {}", format_opt(org.id.as_deref()));
    println!("  Created:       {}", format_date(org.date_created));
    println!("  Early adopter: {}", format_flag(org.is_early_adopter));

    if let Some(quota) = &org.quota {
        println!(
            "  Quota:         {} projects, {} events/min",
            quota.project_limit, quota.max_rate
        );
    }
    if let Some(pending) = org.pending_access_requests {
        println!("  Pending access requests: {}", pending);
    }
    if let Some(features) = org.features.as_ref().filter(|f| !f.is_empty()) {
        println!("  Features:      {}", features.join(", ").dimmed());
    }
}

/// Run the org create command
pub async fn create(ctx: &CommandContext, name: &str) -> Result<()> {
    let org = ctx.client.create_organization(name).await?;

    match ctx.format {
        OutputFormat::Table => println!(
            "{} Created organization {} ({})",
            "✓".green(),
            org.name.bold(),
            format_opt(org.slug.as_deref())
        ),
        OutputFormat::Json => println!("{}", json::format_json(&org)?),
    }

    Ok(())
}

/// Run the org update command
pub async fn update(ctx: &CommandContext, slug: Option<&str>, changes: &OrgChanges) -> Result<()> {
    let slug = ctx.require_org(slug)?;
    let org = apply_update(&ctx.client, &slug, changes).await?;

    match ctx.format {
        OutputFormat::Table => println!("{} Updated organization {}", "✓".green(), slug.bold()),
        OutputFormat::Json => println!("{}", json::format_json(&org)?),
    }

    Ok(())
}

/// Run the org delete command
pub async fn delete(ctx: &CommandContext, slug: &str, yes: bool) -> Result<()> {
    confirm_delete(&ctx.client, slug, yes).await?;
    println!("{} Deleted organization {}", "✓".green(), slug.bold());
    Ok(())
}

/// Run the org teams command
pub async fn teams(ctx: &CommandContext, slug: Option<&str>) -> Result<()> {
    let slug = ctx.require_org(slug)?;
    let teams = ctx
        .client
        .get_organization_teams(&Organization::with_slug(&slug))
        .await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<TeamDisplay> = teams.into_iter().map(TeamDisplay::from).collect();
            rows.print(ctx.format)?;
        }
        OutputFormat::Json => println!("{}", json::format_json(&teams)?),
    }

    Ok(())
}

/// Run the org members command
pub async fn members(ctx: &CommandContext, slug: Option<&str>) -> Result<()> {
    let slug = ctx.require_org(slug)?;
    let members = ctx
        .client
        .get_organization_members(&Organization::with_slug(&slug))
        .await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<MemberDisplay> = members.into_iter().map(MemberDisplay::from).collect();
            rows.print(ctx.format)?;
        }
        OutputFormat::Json => println!("{}", json::format_json(&members)?),
    }

    Ok(())
}

/// Run the org scim-groups command
pub async fn scim_groups(ctx: &CommandContext, slug: Option<&str>) -> Result<()> {
    let slug = ctx.require_org(slug)?;
    let listing = ctx
        .client
        .get_organization_teams_scim(&Organization::with_slug(&slug))
        .await?;

    match ctx.format {
        OutputFormat::Table => {
            let member_total = scim_member_total(&listing.resources);
            let rows: Vec<ScimGroupDisplay> = listing
                .resources
                .into_iter()
                .map(ScimGroupDisplay::from)
                .collect();
            rows.print(ctx.format)?;
            println!(
                "\n{} groups, {} members",
                listing.total_results, member_total
            );
        }
        OutputFormat::Json => println!("{}", json::format_json(&listing)?),
    }

    Ok(())
}

/// Member count across every group in a SCIM listing.
pub fn scim_member_total(groups: &[Resource]) -> usize {
    groups.iter().map(|g| g.members.len()).sum()
}
