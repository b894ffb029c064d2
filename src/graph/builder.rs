// Lineage Graph Builder
//
// Walks from a component/prop up through the components that render it:
// each hop searches the workspace for `<Component` tags, reads the value
// passed for the prop at the first resolvable tag, and attributes that tag
// to the component declared nearest above it. A literal (or an expression
// too complex to follow) ends the walk; an identifier or `props.x`
// continues it with the new prop name.
//
// Hops are collected current-first and reversed once at the end, so the
// chain is plain owned data with no links between nodes.

use super::classify::{classify_value, ValueKind};
use super::types::{Classification, PropNode, PropTrace};
use crate::config::TraceConfig;
use crate::error::{Result, TraceError};
use crate::extractors::{ComponentInfo, ExtractorManager};
use crate::workspace::{FsWorkspaceSearch, WorkspaceSearch, Workspace};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Cooperative cancellation flag shared between a trace and its host
///
/// Checked at every hop boundary and before every candidate file visit.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Position of the walk: which prop of which component we look for next
#[derive(Debug, Clone)]
struct Hop {
    component: String,
    file_path: PathBuf,
    prop: String,
    line: u32,
}

impl Hop {
    fn into_node(self, classification: Classification) -> PropNode {
        PropNode {
            component: self.component,
            file_path: self.file_path,
            prop: self.prop,
            line: self.line,
            classification,
        }
    }
}

/// Outcome of one hop
enum HopOutcome {
    /// A usage site resolved; the walk moves to its enclosing component
    Advanced(Hop, ValueKind),
    /// No candidate resolved; the current hop is where the value originates
    Exhausted,
    /// Every candidate that resolved had already been walked through
    Revisited,
}

/// Per-trace bookkeeping shared by the checkpoints
struct TraceState<'c> {
    cancel: &'c CancellationToken,
    started: Instant,
    budget: Option<Duration>,
    visited: HashSet<(PathBuf, u32)>,
}

impl TraceState<'_> {
    fn checkpoint(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(TraceError::Cancelled);
        }
        if let Some(budget) = self.budget {
            let elapsed = self.started.elapsed();
            if elapsed > budget {
                return Err(TraceError::TimedOut { elapsed, budget });
            }
        }
        Ok(())
    }
}

/// Traces props across component boundaries within one workspace
///
/// Holds no per-trace state, so one tracer can serve concurrent requests;
/// they share only the workspace parse cache.
pub struct PropTracer {
    workspace: Arc<Workspace>,
    search: Arc<dyn WorkspaceSearch>,
    config: TraceConfig,
    manager: ExtractorManager,
}

impl PropTracer {
    pub fn new(
        workspace: Arc<Workspace>,
        search: Arc<dyn WorkspaceSearch>,
        config: TraceConfig,
    ) -> Self {
        Self {
            workspace,
            search,
            config,
            manager: ExtractorManager::new(),
        }
    }

    /// Tracer over files on disk under `root`, searched with [`FsWorkspaceSearch`]
    pub fn for_root(root: impl Into<PathBuf>, config: TraceConfig) -> Result<Self> {
        let workspace = Arc::new(Workspace::new(root));
        let search = Arc::new(FsWorkspaceSearch::new(Arc::clone(&workspace), &config)?);
        Ok(Self::new(workspace, search, config))
    }

    pub fn workspace(&self) -> &Arc<Workspace> {
        &self.workspace
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Components declared in `file_path`, in document order
    pub fn list_components(&self, file_path: &Path) -> Result<Vec<ComponentInfo>> {
        let source = self.workspace.source(file_path)?;
        Ok(self.manager.list_components(&source))
    }

    /// Trace `prop` of `component` (declared in `file_path`) back to its origin
    pub fn build_prop_chain(
        &self,
        file_path: &Path,
        component: &str,
        prop: &str,
    ) -> Result<PropTrace> {
        self.build_prop_chain_with_cancel(file_path, component, prop, &CancellationToken::new())
    }

    pub fn build_prop_chain_with_cancel(
        &self,
        file_path: &Path,
        component: &str,
        prop: &str,
        cancel: &CancellationToken,
    ) -> Result<PropTrace> {
        let mut state = TraceState {
            cancel,
            started: Instant::now(),
            budget: self.config.timeout(),
            visited: HashSet::new(),
        };
        state.checkpoint()?;

        let source = self.workspace.source(file_path)?;
        let line = self
            .manager
            .list_components(&source)
            .iter()
            .find(|info| info.name == component)
            .map_or(0, |info| info.line);

        let mut current = Hop {
            component: component.to_string(),
            file_path: source.path().to_path_buf(),
            prop: prop.to_string(),
            line,
        };
        // Current-first; reversed below
        let mut hops = vec![current.clone()];
        let mut ambiguous = false;
        let mut is_complete = false;
        let mut cyclic = false;

        for depth in 0..self.config.max_trace_depth {
            state.checkpoint()?;

            match self.advance(&current, &mut state)? {
                HopOutcome::Exhausted => {
                    debug!(
                        "No further usages of {}.{}; origin reached after {} hops",
                        current.component, current.prop, depth
                    );
                    is_complete = true;
                    break;
                }
                HopOutcome::Revisited => {
                    debug!(
                        "Usages of {}.{} loop back after {} hops",
                        current.component, current.prop, depth
                    );
                    is_complete = true;
                    cyclic = true;
                    break;
                }
                HopOutcome::Advanced(hop, kind) => {
                    debug!(
                        "Hop {}: {}.{} at {}:{} ({:?})",
                        depth + 1,
                        hop.component,
                        hop.prop,
                        hop.file_path.display(),
                        hop.line,
                        kind
                    );
                    ambiguous |= kind == ValueKind::Spread;
                    hops.push(hop.clone());
                    if kind.is_terminal() {
                        is_complete = true;
                        break;
                    }
                    current = hop;
                }
            }
        }

        hops.reverse();
        let last = hops.len() - 1;
        let chain: Vec<PropNode> = hops
            .into_iter()
            .enumerate()
            .map(|(index, hop)| {
                let classification = if index == 0 {
                    Classification::Source
                } else if index == last {
                    Classification::Definition
                } else {
                    Classification::Usage
                };
                hop.into_node(classification)
            })
            .collect();

        let trace = PropTrace {
            prop: prop.to_string(),
            chain,
            is_complete,
            ambiguous,
            cyclic,
        };

        info!(
            "Traced {}.{}: {} ({} hops, complete: {}, ambiguous: {}, cyclic: {}, {:?})",
            component,
            prop,
            trace.render_path(),
            trace.hops(),
            trace.is_complete,
            trace.ambiguous,
            trace.cyclic,
            state.started.elapsed()
        );
        Ok(trace)
    }

    /// Resolve the first usable tag of the current component
    fn advance(&self, current: &Hop, state: &mut TraceState) -> Result<HopOutcome> {
        let candidates = self.search.find_tag_usages(&current.component)?;
        let mut revisited = false;

        for candidate in candidates {
            let candidate_path = self.workspace.normalize(&candidate.file_path);
            if candidate_path == current.file_path {
                continue;
            }
            state.checkpoint()?;

            let source = match self.workspace.source(&candidate_path) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping candidate {}:{}: {}", candidate_path.display(), candidate.line, e);
                    continue;
                }
            };

            let Some(usage) = self.manager.find_prop_usage_near(
                &source,
                &current.component,
                &current.prop,
                candidate.line,
            ) else {
                continue;
            };

            let site = (candidate_path.clone(), usage.line);
            if self.config.detect_cycles && state.visited.contains(&site) {
                debug!(
                    "Already visited {}:{}, skipping",
                    candidate_path.display(),
                    usage.line
                );
                revisited = true;
                continue;
            }

            let components = self.manager.list_components(&source);
            let Some(enclosing) = enclosing_component(&components, usage.line) else {
                debug!(
                    "No component encloses {}:{}",
                    candidate_path.display(),
                    usage.line
                );
                continue;
            };

            if self.config.detect_cycles {
                state.visited.insert(site);
            }
            let kind = classify_value(&usage.value);
            let hop = Hop {
                component: enclosing.name.clone(),
                file_path: candidate_path,
                prop: kind.next_prop(&current.prop).to_string(),
                line: usage.line,
            };
            return Ok(HopOutcome::Advanced(hop, kind));
        }

        Ok(if revisited {
            HopOutcome::Revisited
        } else {
            HopOutcome::Exhausted
        })
    }
}

/// The component declared nearest above `line`; the later one wins a tie
fn enclosing_component(components: &[ComponentInfo], line: u32) -> Option<&ComponentInfo> {
    components
        .iter()
        .filter(|info| info.line <= line)
        .max_by_key(|info| info.line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::search::test_support::ListedSearch;
    use crate::workspace::test_support::MemoryFiles;
    use crate::workspace::TagLocation;

    fn tracer_with(files: &[(&str, &str)], config: TraceConfig) -> PropTracer {
        let memory = files
            .iter()
            .fold(MemoryFiles::new(), |memory, (path, content)| memory.with(path, content));
        let paths = memory.paths();
        let workspace = Arc::new(Workspace::with_accessor("/ws", Arc::new(memory)));
        let search = Arc::new(ListedSearch {
            workspace: Arc::clone(&workspace),
            files: paths,
        });
        PropTracer::new(workspace, search, config)
    }

    fn tracer(files: &[(&str, &str)]) -> PropTracer {
        tracer_with(files, TraceConfig::default())
    }

    fn assert_shape(trace: &PropTrace, max_depth: usize) {
        assert!(!trace.chain.is_empty());
        assert!(trace.len() <= max_depth + 1);
        assert_eq!(trace.chain[0].classification, Classification::Source);
        if trace.len() > 1 {
            let last = trace.len() - 1;
            assert_eq!(trace.chain[last].classification, Classification::Definition);
            for node in &trace.chain[1..last] {
                assert_eq!(node.classification, Classification::Usage);
            }
        }
    }

    fn components(trace: &PropTrace) -> Vec<&str> {
        trace.chain.iter().map(|n| n.component.as_str()).collect()
    }

    /// A ring of components, each rendering the next and forwarding `v`
    fn ring(names: &[&str]) -> Vec<(String, String)> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let next = names[(i + 1) % names.len()];
                (
                    format!("/ws/{}.tsx", name),
                    format!(
                        "export function {}({{ v }}) {{\n  return <{} v={{v}} />;\n}}\n",
                        name, next
                    ),
                )
            })
            .collect()
    }

    fn borrowed(files: &[(String, String)]) -> Vec<(&str, &str)> {
        files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect()
    }

    const CHILD: &str = "export function Child({ label, title }: { label: string; title: string }) {\n  return <span>{label}{title}</span>;\n}\n";

    #[test]
    fn test_simple_literal() {
        let tracer = tracer(&[
            (
                "/ws/Parent.tsx",
                "import { Child } from './Child';\n\nexport function Parent() {\n  return <Child label=\"hi\" />;\n}\n",
            ),
            ("/ws/Child.tsx", CHILD),
        ]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "label")
            .unwrap();

        assert_shape(&trace, 20);
        assert_eq!(trace.prop, "label");
        assert_eq!(
            trace.chain,
            vec![
                PropNode {
                    component: "Parent".to_string(),
                    file_path: PathBuf::from("/ws/Parent.tsx"),
                    prop: "label".to_string(),
                    line: 4,
                    classification: Classification::Source,
                },
                PropNode {
                    component: "Child".to_string(),
                    file_path: PathBuf::from("/ws/Child.tsx"),
                    prop: "label".to_string(),
                    line: 1,
                    classification: Classification::Definition,
                },
            ]
        );
        assert!(trace.is_complete);
        assert!(!trace.ambiguous);
        assert!(!trace.cyclic);
    }

    #[test]
    fn test_rename_across_hop() {
        let tracer = tracer(&[
            (
                "/ws/Parent.tsx",
                "export function Parent({ parentHeading }) {\n  return <Child title={parentHeading} />;\n}\n",
            ),
            ("/ws/Child.tsx", CHILD),
        ]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "title")
            .unwrap();

        assert_shape(&trace, 20);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.chain[0].component, "Parent");
        assert_eq!(trace.chain[0].prop, "parentHeading");
        assert_eq!(trace.chain[1].prop, "title");
        assert!(trace.is_complete);
    }

    #[test]
    fn test_spread_marks_trace_ambiguous() {
        let tracer = tracer(&[
            (
                "/ws/Parent.tsx",
                "export function Parent(rest) {\n  return <Child {...rest} />;\n}\n",
            ),
            ("/ws/Child.tsx", CHILD),
        ]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "title")
            .unwrap();

        assert_shape(&trace, 20);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.chain[0].component, "Parent");
        assert_eq!(trace.chain[0].prop, "title");
        assert!(trace.ambiguous);
        assert!(trace.is_complete);
    }

    #[test]
    fn test_orphan_component() {
        let tracer = tracer(&[(
            "/ws/Orphan.tsx",
            "\nexport const Orphan = ({ label }) => <b>{label}</b>;\n",
        )]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Orphan.tsx"), "Orphan", "label")
            .unwrap();

        assert_shape(&trace, 20);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.source(), trace.definition());
        assert_eq!(trace.chain[0].classification, Classification::Source);
        assert_eq!(trace.chain[0].line, 2);
        assert!(trace.is_complete);
        assert!(!trace.ambiguous);
    }

    #[test]
    fn test_depth_exhaustion_on_long_ring() {
        let files = ring(&["A", "B", "C", "D", "E"]);
        let tracer = tracer_with(&borrowed(&files), TraceConfig::default().with_max_depth(3));

        let trace = tracer
            .build_prop_chain(Path::new("/ws/A.tsx"), "A", "v")
            .unwrap();

        assert_shape(&trace, 3);
        assert!(!trace.is_complete);
        assert_eq!(trace.len(), 4);
        assert_eq!(components(&trace), vec!["C", "D", "E", "A"]);
        assert!(!trace.cyclic);
    }

    #[test]
    fn test_chain_length_bounded_for_every_depth() {
        let files = ring(&["A", "B"]);
        for max_depth in 0..5 {
            let mut config = TraceConfig::default().with_max_depth(max_depth);
            config.detect_cycles = false;
            let tracer = tracer_with(&borrowed(&files), config);

            let trace = tracer
                .build_prop_chain(Path::new("/ws/A.tsx"), "A", "v")
                .unwrap();
            assert_shape(&trace, max_depth);
            assert_eq!(trace.len(), max_depth + 1);
            assert!(!trace.is_complete);
        }
    }

    #[test]
    fn test_short_cycle_stops_at_visited_site() {
        let files = ring(&["A", "B"]);
        let tracer = tracer_with(&borrowed(&files), TraceConfig::default().with_max_depth(10));

        let trace = tracer
            .build_prop_chain(Path::new("/ws/A.tsx"), "A", "v")
            .unwrap();

        assert_shape(&trace, 10);
        assert_eq!(components(&trace), vec!["A", "B", "A"]);
        // Stopped by the visited set, not by depth
        assert!(trace.is_complete);
        assert!(trace.cyclic);
        assert_eq!(trace.chain[0].classification, Classification::Source);
    }

    #[test]
    fn test_multi_hop_with_props_access() {
        let tracer = tracer(&[
            (
                "/ws/Page.tsx",
                "export function Page() {\n  return <Layout heading=\"Welcome\" />;\n}\n",
            ),
            (
                "/ws/Layout.tsx",
                "export function Layout(props) {\n  return (\n    <main>\n      <Header title={props.heading} />\n    </main>\n  );\n}\n",
            ),
            (
                "/ws/Header.tsx",
                "interface HeaderProps { title: string }\nexport const Header = ({ title }: HeaderProps) => <h1>{title}</h1>;\n",
            ),
        ]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Header.tsx"), "Header", "title")
            .unwrap();

        assert_shape(&trace, 20);
        assert_eq!(
            trace.render_path(),
            "Page.heading → Layout.heading → Header.title"
        );
        assert_eq!(trace.chain[1].line, 4);
        assert_eq!(trace.chain[2].line, 2);
        assert!(trace.is_complete);
        assert!(!trace.ambiguous);
    }

    #[test]
    fn test_literal_on_last_allowed_hop_is_complete() {
        let tracer = tracer_with(
            &[
                (
                    "/ws/Page.tsx",
                    "export function Page() {\n  return <Layout heading=\"Welcome\" />;\n}\n",
                ),
                (
                    "/ws/Layout.tsx",
                    "export function Layout(props) {\n  return <Header title={props.heading} />;\n}\n",
                ),
                ("/ws/Header.tsx", "export const Header = ({ title }) => <h1>{title}</h1>;\n"),
            ],
            TraceConfig::default().with_max_depth(2),
        );

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Header.tsx"), "Header", "title")
            .unwrap();

        assert_shape(&trace, 2);
        assert_eq!(trace.len(), 3);
        assert_eq!(components(&trace), vec!["Page", "Layout", "Header"]);
        assert!(trace.is_complete);
        assert!(!trace.cyclic);

        // One hop short of the literal
        let tracer = tracer_with(
            &[
                ("/ws/Layout.tsx", "export function Layout(props) {\n  return <Header title={props.heading} />;\n}\n"),
                ("/ws/Page.tsx", "export function Page() {\n  return <Layout heading=\"Welcome\" />;\n}\n"),
                ("/ws/Header.tsx", "export const Header = ({ title }) => <h1>{title}</h1>;\n"),
            ],
            TraceConfig::default().with_max_depth(1),
        );
        let trace = tracer
            .build_prop_chain(Path::new("/ws/Header.tsx"), "Header", "title")
            .unwrap();
        assert_eq!(components(&trace), vec!["Layout", "Header"]);
        assert!(!trace.is_complete);
    }

    #[test]
    fn test_opaque_value_ends_trace() {
        let tracer = tracer(&[
            (
                "/ws/Parent.tsx",
                "export function Parent() {\n  return <Child label={format(name)} />;\n}\n",
            ),
            ("/ws/Child.tsx", CHILD),
        ]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "label")
            .unwrap();
        assert_eq!(components(&trace), vec!["Parent", "Child"]);
        assert_eq!(trace.chain[0].prop, "label");
        assert!(trace.is_complete);
    }

    #[test]
    fn test_same_file_usages_are_skipped() {
        let tracer = tracer(&[(
            "/ws/Both.tsx",
            "function Child({ label }) { return null; }\nexport function Parent() {\n  return <Child label=\"x\" />;\n}\n",
        )]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Both.tsx"), "Child", "label")
            .unwrap();
        assert_eq!(trace.len(), 1);
        assert!(trace.is_complete);
    }

    #[test]
    fn test_unresolvable_candidates_fall_through() {
        let tracer = tracer(&[
            // Comment hit: lexical match, no tag
            ("/ws/A.tsx", "// use <Child label=\"x\" /> here\nexport const A = () => null;\n"),
            // Tag outside any component
            ("/ws/B.tsx", "const el = <Child label=\"loose\" />;\nexport function B() { return el; }\n"),
            // Tag without the prop
            ("/ws/C.tsx", "export function C() {\n  return <Child title=\"t\" />;\n}\n"),
            ("/ws/Child.tsx", CHILD),
            ("/ws/D.tsx", "export function D() {\n  return <Child label=\"found\" />;\n}\n"),
        ]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "label")
            .unwrap();
        assert_eq!(components(&trace), vec!["D", "Child"]);
    }

    #[test]
    fn test_enclosing_component_is_nearest_preceding() {
        let tracer = tracer(&[
            (
                "/ws/Views.tsx",
                "export function First() {\n  return null;\n}\n\nexport function Second() {\n  return <Child label=\"two\" />;\n}\n",
            ),
            ("/ws/Child.tsx", CHILD),
        ]);

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "label")
            .unwrap();
        assert_eq!(trace.chain[0].component, "Second");
        assert_eq!(trace.chain[0].line, 6);
    }

    #[test]
    fn test_undeclared_component_starts_at_line_zero() {
        let tracer = tracer(&[("/ws/Index.tsx", "export { Child } from './Child';\n")]);
        let trace = tracer
            .build_prop_chain(Path::new("/ws/Index.tsx"), "Child", "label")
            .unwrap();
        assert_eq!(trace.chain[0].line, 0);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_deterministic() {
        let files = ring(&["A", "B", "C"]);
        let tracer = tracer_with(&borrowed(&files), TraceConfig::default().with_max_depth(7));
        let first = tracer.build_prop_chain(Path::new("/ws/A.tsx"), "A", "v").unwrap();
        let second = tracer.build_prop_chain(Path::new("/ws/A.tsx"), "A", "v").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_requested_file_errors_propagate() {
        let tracer = tracer(&[("/ws/notes.md", "<Child />")]);

        let missing = tracer.build_prop_chain(Path::new("/ws/Missing.tsx"), "Child", "label");
        assert!(matches!(missing, Err(TraceError::Io { .. })));

        let unsupported = tracer.list_components(Path::new("/ws/notes.md"));
        assert!(matches!(unsupported, Err(TraceError::UnsupportedLanguage(_))));
    }

    /// Search returning fixed locations, optionally slowly
    struct FixedSearch {
        locations: Vec<TagLocation>,
        delay: Duration,
    }

    impl WorkspaceSearch for FixedSearch {
        fn find_tag_usages(&self, _tag_name: &str) -> Result<Vec<TagLocation>> {
            std::thread::sleep(self.delay);
            Ok(self.locations.clone())
        }
    }

    fn fixed_tracer(locations: Vec<TagLocation>, delay: Duration, config: TraceConfig) -> PropTracer {
        let memory = MemoryFiles::new()
            .with("/ws/Child.tsx", CHILD)
            .with(
                "/ws/Parent.tsx",
                "export function Parent() {\n  return <Child label=\"hi\" />;\n}\n",
            );
        let workspace = Arc::new(Workspace::with_accessor("/ws", Arc::new(memory)));
        let search = Arc::new(FixedSearch { locations, delay });
        PropTracer::new(workspace, search, config)
    }

    fn location(path: &str, line: u32) -> TagLocation {
        TagLocation {
            file_path: PathBuf::from(path),
            line,
        }
    }

    #[test]
    fn test_vanished_candidate_file_is_skipped() {
        let tracer = fixed_tracer(
            vec![location("/ws/Deleted.tsx", 3), location("Parent.tsx", 2)],
            Duration::ZERO,
            TraceConfig::default().with_max_depth(1),
        );

        let trace = tracer
            .build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "label")
            .unwrap();
        assert_eq!(components(&trace), vec!["Parent", "Child"]);
        assert_eq!(trace.chain[0].file_path, PathBuf::from("/ws/Parent.tsx"));
    }

    #[test]
    fn test_cancelled_trace() {
        let tracer = fixed_tracer(vec![], Duration::ZERO, TraceConfig::default());
        let token = CancellationToken::new();
        token.cancel();

        let result = tracer.build_prop_chain_with_cancel(
            Path::new("/ws/Child.tsx"),
            "Child",
            "label",
            &token,
        );
        assert!(matches!(result, Err(TraceError::Cancelled)));
    }

    /// Search that cancels the running trace as soon as it is consulted
    struct CancellingSearch {
        token: CancellationToken,
        locations: Vec<TagLocation>,
    }

    impl WorkspaceSearch for CancellingSearch {
        fn find_tag_usages(&self, _tag_name: &str) -> Result<Vec<TagLocation>> {
            self.token.cancel();
            Ok(self.locations.clone())
        }
    }

    #[test]
    fn test_cancel_during_trace_stops_before_candidate_visit() {
        let memory = MemoryFiles::new()
            .with("/ws/Child.tsx", CHILD)
            .with(
                "/ws/Parent.tsx",
                "export function Parent() {\n  return <Child label=\"hi\" />;\n}\n",
            );
        let workspace = Arc::new(Workspace::with_accessor("/ws", Arc::new(memory)));
        let token = CancellationToken::new();
        let search = Arc::new(CancellingSearch {
            token: token.clone(),
            locations: vec![location("/ws/Parent.tsx", 2)],
        });
        let tracer = PropTracer::new(Arc::clone(&workspace), search, TraceConfig::default());

        let result = tracer.build_prop_chain_with_cancel(
            Path::new("/ws/Child.tsx"),
            "Child",
            "label",
            &token,
        );
        assert!(matches!(result, Err(TraceError::Cancelled)));
        assert!(token.is_cancelled());
        // The candidate file was never opened
        assert!(!workspace.is_cached(Path::new("/ws/Parent.tsx")));
    }

    #[test]
    fn test_timeout_checked_before_candidate_visit() {
        let mut config = TraceConfig::default();
        config.trace_timeout = 1;
        let tracer = fixed_tracer(
            vec![location("/ws/Parent.tsx", 2)],
            Duration::from_millis(20),
            config,
        );

        let result = tracer.build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "label");
        assert!(matches!(result, Err(TraceError::TimedOut { .. })));
    }

    #[test]
    fn test_disabled_timeout_never_fires() {
        let mut config = TraceConfig::default();
        config.trace_timeout = 0;
        let tracer = fixed_tracer(
            vec![location("/ws/Parent.tsx", 2)],
            Duration::from_millis(5),
            config,
        );
        assert!(tracer
            .build_prop_chain(Path::new("/ws/Child.tsx"), "Child", "label")
            .is_ok());
    }

    #[test]
    fn test_overlay_changes_next_trace() {
        let tracer = tracer(&[
            (
                "/ws/Parent.tsx",
                "export function Parent() {\n  return <Child label=\"saved\" />;\n}\n",
            ),
            ("/ws/Child.tsx", CHILD),
        ]);
        let child = Path::new("/ws/Child.tsx");

        let before = tracer.build_prop_chain(child, "Child", "label").unwrap();
        assert_eq!(before.chain[0].prop, "label");

        tracer.workspace().set_overlay(
            Path::new("/ws/Parent.tsx"),
            "export function Parent({ draft }) {\n  return <Child label={draft} />;\n}\n",
        );
        let after = tracer.build_prop_chain(child, "Child", "label").unwrap();
        assert_eq!(after.chain[0].prop, "draft");
    }

    #[test]
    fn test_on_disk_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("src/components")).unwrap();
        std::fs::write(root.join("src/components/Child.tsx"), CHILD).unwrap();
        std::fs::write(
            root.join("src/App.tsx"),
            "import { Child } from './components/Child';\n\nexport default function App() {\n  return <Child label='from disk' />;\n}\n",
        )
        .unwrap();

        let tracer = PropTracer::for_root(root, TraceConfig::default()).unwrap();
        let child = root.join("src/components/Child.tsx");

        let listed = tracer.list_components(&child).unwrap();
        assert_eq!(listed[0].props, vec!["label", "title"]);

        let trace = tracer.build_prop_chain(&child, "Child", "label").unwrap();
        assert_eq!(components(&trace), vec!["App", "Child"]);
        assert_eq!(trace.chain[0].line, 4);
        assert!(trace.is_complete);
        assert!(tracer.workspace().cached_files() >= 2);
    }

    #[test]
    fn test_relative_root() {
        let dir = tempfile::Builder::new().tempdir_in(".").unwrap();
        let root = dir.path();
        assert!(root.is_relative());
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::write(root.join("src/Child.tsx"), CHILD).unwrap();
        std::fs::write(
            root.join("src/App.tsx"),
            "export function App() {\n  return <Child label=\"hi\" />;\n}\n",
        )
        .unwrap();

        let tracer = PropTracer::for_root(root, TraceConfig::default()).unwrap();
        assert!(tracer.workspace().root().is_absolute());

        // Relative paths are relative to the workspace root
        let child = Path::new("src/Child.tsx");
        assert_eq!(tracer.list_components(child).unwrap()[0].name, "Child");

        let trace = tracer.build_prop_chain(child, "Child", "label").unwrap();
        assert_eq!(components(&trace), vec!["App", "Child"]);
        assert_eq!(trace.chain[0].file_path, tracer.workspace().root().join("src/App.tsx"));
        assert!(trace.is_complete);
    }
}
