use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    tracing::debug!("Database ready at {}", database_url);
    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Students. The RA column is filled by the trigger below, never by clients.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS aluno (
            id_aluno INTEGER PRIMARY KEY AUTOINCREMENT,
            ra TEXT UNIQUE,
            nome TEXT NOT NULL,
            sobrenome TEXT NOT NULL,
            data_nascimento TEXT NOT NULL,
            endereco TEXT NOT NULL,
            email TEXT NOT NULL,
            celular TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TRIGGER IF NOT EXISTS aluno_ra
        AFTER INSERT ON aluno
        WHEN NEW.ra IS NULL
        BEGIN
            UPDATE aluno SET ra = 'AAA' || printf('%04d', NEW.id_aluno)
            WHERE id_aluno = NEW.id_aluno;
        END
        "#
        .to_owned(),
    ))
    .await?;

    // Books. Copy counts are plain integers, not tied to emprestimo rows.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS livro (
            id_livro INTEGER PRIMARY KEY AUTOINCREMENT,
            titulo TEXT NOT NULL,
            autor TEXT NOT NULL,
            editora TEXT NOT NULL,
            ano_publicacao TEXT NOT NULL,
            isbn TEXT NOT NULL,
            quant_total INTEGER NOT NULL,
            quant_disponivel INTEGER NOT NULL,
            valor_aquisicao REAL NOT NULL,
            status_livro_emprestado TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Loans. No FOREIGN KEY clauses: student and book ids are not enforced.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS emprestimo (
            id_emprestimo INTEGER PRIMARY KEY AUTOINCREMENT,
            id_aluno INTEGER NOT NULL,
            id_livro INTEGER NOT NULL,
            data_emprestimo TEXT NOT NULL,
            data_devolucao TEXT NOT NULL,
            status_emprestimo TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    Ok(())
}
