use tmatrix::{DynamicMatrix, DynamicVector, TmError};

fn main() -> Result<(), TmError> {
    let a = DynamicMatrix::from_rows(vec![vec![1, 2, 4], vec![4, 6, 7], vec![6, 7, 3]])?;
    let b = DynamicMatrix::from_rows(vec![vec![2, 3, 4], vec![3, 4, 5], vec![2, 7, 8]])?;
    println!("A * B =\n{}", a.try_mul(&b)?);

    let v = DynamicVector::try_from(vec![1, 2, 3])?;
    println!("A * v = {}", a.mul_vector(&v)?);
    println!("v . v = {}", v.dot(&v)?);

    // dimension is known up front; the stream carries only the values
    let m = DynamicMatrix::<f64>::read_sized(2, "0.5 1.5\n2.5 3.5\n".as_bytes())?;
    m.write_to(&mut std::io::stdout())?;

    match a.try_add(&DynamicMatrix::new(2)?) {
        Err(e) => println!("expected failure: {e}"),
        Ok(_) => unreachable!(),
    }
    Ok(())
}
