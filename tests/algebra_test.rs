use qe::graph::{generate_subgraphs, generate_subgraphs_up_to};
use qe::{Binary, BinaryPhase, Graph, Pauli, QeError};

#[test]
fn pauli_phase_bookkeeping() -> Result<(), QeError> {
    for (input, stored) in [("XYZ", 1), ("iXYZ", 2), ("-XYZ", 3), ("-iXYZ", 0)] {
        let pauli: Pauli = input.parse()?;
        assert_eq!(pauli.phase(), BinaryPhase::new(stored), "input: {input}");
    }
    assert_eq!(Pauli::try_from("iXYYZ")?.to_string(), "iXYYZ");
    assert_eq!(Pauli::single_x(3, 1).to_string(), "+IXI");
    assert_eq!(Pauli::single_z(3, 1).to_string(), "+IZI");
    Ok(())
}

#[test]
fn pauli_rejects_bad_strings() {
    assert!(matches!(
        "".parse::<Pauli>(),
        Err(QeError::MalformedInput { .. })
    ));
    assert!(matches!(
        "XQ".parse::<Pauli>(),
        Err(QeError::MalformedInput { .. })
    ));
}

#[test]
fn building_a_graph_state() -> Result<(), QeError> {
    // a 4-qubit GHZ graph state in star form, turned into the complete graph and back
    let star = Graph::star(4, 0);
    let mut graph = star.clone();
    graph.local_complementation(0);
    assert_eq!(graph, Graph::fully_connected(4));
    graph.local_complementation(0);
    assert_eq!(graph, star);

    let relabeled = star.graph_isomorphism(&[3, 1, 2, 0])?;
    assert_eq!(relabeled, Graph::star(4, 3));

    let code = Graph::compress(&relabeled)?;
    assert_eq!(Graph::decompress(4, code)?, relabeled);

    let union = Graph::add(&star, &Graph::linear(4))?;
    assert_eq!(union.get_edges(), [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
    assert_eq!(union.adjacency_matrix().get(2, 1), Binary::ONE);
    Ok(())
}

#[test]
fn components_and_subgraphs() -> Result<(), QeError> {
    let graph = Graph::with_edges(8, &[(2, 3), (3, 5), (0, 7)]);
    assert_eq!(
        graph.connected_components(true),
        [vec![1], vec![4], vec![6], vec![0, 7], vec![2, 3, 5]]
    );

    assert_eq!(generate_subgraphs_up_to(&Graph::linear(3), usize::MAX)?.len(), 4);
    // every single-edge subgraph of the pusteblume is one component plus isolated vertices
    for subgraph in generate_subgraphs(&Graph::pusteblume(7)?, 1, 1)? {
        assert_eq!(subgraph.connected_components(false).len(), 6);
    }
    Ok(())
}
