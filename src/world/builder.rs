use super::model::{Controls, Mansion, create_room};

/// The built-in mansion. Literal wiring, top-down.
///
/// ```text
/// Hall de Entrada
/// ├── Sala de Estar
/// │   ├── Cozinha
/// │   └── Jardim
/// └── Corredor Principal
///     ├── Escritório
///     │   ├── Quarto de Hóspedes
///     │   └── Despensa
///     └── Biblioteca
/// ```
pub fn build_mansion() -> Mansion {
    let mut hall = create_room("Hall de Entrada");

    let mut sala = create_room("Sala de Estar");
    sala.left = Some(create_room("Cozinha"));
    sala.right = Some(create_room("Jardim"));

    let mut escritorio = create_room("Escritório");
    escritorio.left = Some(create_room("Quarto de Hóspedes"));
    escritorio.right = Some(create_room("Despensa"));

    let mut corredor = create_room("Corredor Principal");
    corredor.left = Some(escritorio);
    corredor.right = Some(create_room("Biblioteca"));

    hall.left = Some(sala);
    hall.right = Some(corredor);

    tracing::debug!(rooms = hall.count(), "built-in mansion assembled");

    Mansion {
        name: "Mansão".to_string(),
        root: hall,
        controls: Controls::default(),
        suspects: Vec::new(),
    }
}
