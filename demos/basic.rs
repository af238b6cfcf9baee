//! adjgraph 演示
//!
//! 构建一个小图，演示加边、遍历、级联删除和宽松模式
//!
//! 运行：`RUST_LOG=debug cargo run --example basic`

use adjgraph::{Graph, GraphConfig, SharedGraph};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    init_tracing();

    println!("adjgraph 演示");
    println!("==============\n");

    let mut graph = Graph::new();
    let a = graph.new_node("A");
    let b = graph.new_node("B");
    graph.add_vertex(a)?;
    graph.add_vertex(b)?;
    graph.add_edge(a, b)?;

    println!("A 的邻居: {:?}", neighbor_values(&graph, a));
    println!("B 的邻居: {:?}", neighbor_values(&graph, b));

    let c = graph.insert("C");
    graph.add_edge(a, c)?;
    println!("A 的邻居: {:?}", neighbor_values(&graph, a));
    println!("C 的邻居: {:?}", neighbor_values(&graph, c));

    println!("DFS(A): {:?}", graph.depth_first_search(a)?);
    println!("BFS(A): {:?}", graph.breadth_first_search(a)?);

    // 未注册的节点
    let stray = graph.new_node("Z");
    match graph.add_edge(a, stray) {
        Ok(_) => println!("意外：边被添加"),
        Err(e) => println!("加边失败: {}", e),
    }

    graph.remove_vertex(a)?;
    println!(
        "移除 A 后: {} 顶点, {} 边, B 的邻居 {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        neighbor_values(&graph, b)
    );

    // 宽松模式
    let mut lenient = Graph::with_config(GraphConfig::lenient());
    let x = lenient.insert("X");
    let outside = lenient.new_node("Y");
    println!("宽松模式加边: {}", lenient.add_edge(x, outside)?);

    // 共享图
    let shared: SharedGraph<&str> = graph.into();
    let d = shared.insert("D");
    shared.add_edge(b, d)?;
    println!("共享图 BFS(B): {:?}", shared.breadth_first_search(b)?);

    info!(metrics = ?shared.metrics(), "演示结束");
    Ok(())
}

fn neighbor_values<'a>(graph: &'a Graph<&'static str>, id: adjgraph::NodeId) -> Vec<&'a str> {
    graph
        .neighbors(id)
        .into_iter()
        .flatten()
        .filter_map(|n| graph.value(n).copied())
        .collect()
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
