//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each tool creates its own route; the registry decides which services are
//! enabled and hands over their clients.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    GetNoteTool, GetStoryTool, GetTopStoriesTool, GetUserTool, ListNotesTool, PostNoteTool,
    UpdateNoteTool,
};
use super::registry::ToolRegistry;

/// Build the tool router with every tool the registry has enabled.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();

    if let Some(client) = registry.hacker_news() {
        router = router
            .with_route(GetTopStoriesTool::create_route(client.clone()))
            .with_route(GetStoryTool::create_route(client.clone()));
    }

    if let Some(client) = registry.hackmd() {
        router = router
            .with_route(GetUserTool::create_route(client.clone()))
            .with_route(ListNotesTool::create_route(client.clone()))
            .with_route(GetNoteTool::create_route(client.clone()))
            .with_route(PostNoteTool::create_route(client.clone()))
            .with_route(UpdateNoteTool::create_route(client.clone()));
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Config, ServiceSelection};

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let registry = ToolRegistry::new(&Config::default()).unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_top_stories"));
        assert!(names.contains(&"get_story"));
        assert!(names.contains(&"update_note"));
    }

    #[test]
    fn test_registry_matches_router() {
        for selection in [
            ServiceSelection::All,
            ServiceSelection::HackerNews,
            ServiceSelection::Hackmd,
        ] {
            let mut config = Config::default();
            config.services.selection = selection;
            let registry = ToolRegistry::new(&config).unwrap();
            let registry_names = registry.tool_names();

            let router: ToolRouter<TestServer> = build_tool_router(&registry);
            let router_tools = router.list_all();
            let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

            assert_eq!(registry_names.len(), router_names.len());
            for name in registry_names {
                assert!(router_names.contains(&name));
            }
        }
    }

    #[test]
    fn test_hackmd_routes_carry_output_schema() {
        let mut config = Config::default();
        config.services.selection = ServiceSelection::Hackmd;
        let registry = ToolRegistry::new(&config).unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        assert!(router.list_all().iter().all(|t| t.output_schema.is_some()));
    }
}
